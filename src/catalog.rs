//! Registry of every algorithm the crate can trace
//!
//! [`Algorithm`] is the user-selectable identifier. It resolves to the
//! engine that produces its trace and to a static [`AlgorithmInfo`] bundle
//! carrying the metadata, explanation and reference code shown next to the
//! trace.

use crate::errors::InputError;
use crate::searching::SearchAlgorithm;
use crate::sorting::SortAlgorithm;
use crate::trace::{Complexity, RunResult, SearchRun, SortRun};
use std::fmt;
use std::str::FromStr;

/// Static description of one algorithm
#[derive(Debug)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: Complexity,
    pub space_complexity: &'static str,
    pub explanation: &'static str,
    pub code: &'static str,
}

impl AlgorithmInfo {
    /// Wrap a finished trace with this algorithm's metadata
    pub fn run_result<S>(&self, steps: Vec<S>) -> RunResult<S> {
        RunResult {
            name: self.name,
            description: self.description,
            time_complexity: self.time_complexity,
            space_complexity: self.space_complexity,
            steps,
        }
    }
}

pub static BUBBLE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    description: "A simple sorting algorithm that repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
    time_complexity: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    explanation: "Each pass bubbles the largest remaining element to the end of the unsorted region. \
                  A pass without any swap proves the array is sorted, so the algorithm stops early.",
    code: r#"fn bubble_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            // Compare adjacent elements
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}"#,
};

pub static QUICK_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    description: "An efficient divide-and-conquer algorithm that picks a pivot element and partitions the array around it.",
    time_complexity: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space_complexity: "O(log n)",
    explanation: "The last element of a range is the pivot. Smaller elements move in front of it, \
                  the pivot lands in its final slot, and both sides are sorted recursively.",
    code: r#"fn quick_sort(arr: &mut [i64], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pi = partition(arr, low, high);
    if pi > low {
        quick_sort(arr, low, pi - 1);
    }
    quick_sort(arr, pi + 1, high);
}

fn partition(arr: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = arr[high]; // last element as pivot
    let mut store = low;
    for j in low..high {
        if arr[j] < pivot {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, high);
    store
}"#,
};

pub static MERGE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    description: "A stable divide-and-conquer algorithm that divides the array into halves, sorts them, and merges them back.",
    time_complexity: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space_complexity: "O(n)",
    explanation: "The range is split at its midpoint until single elements remain. Merging two sorted \
                  runs repeatedly takes the smaller head, preferring the left run on ties.",
    code: r#"fn merge_sort(arr: &mut [i64]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);

    let (left, right) = (arr[..mid].to_vec(), arr[mid..].to_vec());
    let (mut i, mut j) = (0, 0);
    for slot in arr.iter_mut() {
        // Take from the left run on ties to stay stable
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}"#,
};

pub static INSERTION_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    description: "A simple sorting algorithm that builds the final sorted array one item at a time by inserting elements into their correct position.",
    time_complexity: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    explanation: "The prefix before index i is always sorted. The element at i is lifted out, larger \
                  predecessors shift one slot right, and the element drops into the gap.",
    code: r#"fn insertion_sort(arr: &mut [i64]) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut slot = i;
        // Shift greater elements one position ahead
        while slot > 0 && arr[slot - 1] > key {
            arr[slot] = arr[slot - 1];
            slot -= 1;
        }
        arr[slot] = key;
    }
}"#,
};

pub static LINEAR_SEARCH: AlgorithmInfo = AlgorithmInfo {
    name: "Linear Search",
    description: "A simple search algorithm that checks every element in the array sequentially until the target is found.",
    time_complexity: Complexity {
        best: "O(1)",
        average: "O(n)",
        worst: "O(n)",
    },
    space_complexity: "O(1)",
    explanation: "Works on unsorted data. Every element is checked in order until one equals the target.",
    code: r#"fn linear_search(arr: &[i64], target: i64) -> Option<usize> {
    for (i, &value) in arr.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}"#,
};

pub static BINARY_SEARCH: AlgorithmInfo = AlgorithmInfo {
    name: "Binary Search",
    description: "An efficient search algorithm that works on sorted arrays by repeatedly dividing the search interval in half.",
    time_complexity: Complexity {
        best: "O(1)",
        average: "O(log n)",
        worst: "O(log n)",
    },
    space_complexity: "O(1)",
    explanation: "Requires sorted data. The middle of the window is compared with the target and half \
                  of the window is discarded on every probe.",
    code: r#"fn binary_search(arr: &[i64], target: i64) -> Option<usize> {
    let (mut left, mut right) = (0isize, arr.len() as isize - 1);
    while left <= right {
        let mid = ((left + right) / 2) as usize;
        if arr[mid] == target {
            return Some(mid);
        }
        if arr[mid] < target {
            left = mid as isize + 1;
        } else {
            right = mid as isize - 1;
        }
    }
    None
}"#,
};

pub static JUMP_SEARCH: AlgorithmInfo = AlgorithmInfo {
    name: "Jump Search",
    description: "A search algorithm that works on sorted arrays by jumping ahead by fixed steps and then performing linear search.",
    time_complexity: Complexity {
        best: "O(1)",
        average: "O(√n)",
        worst: "O(√n)",
    },
    space_complexity: "O(1)",
    explanation: "Requires sorted data. The search jumps √n elements at a time until a block boundary \
                  reaches the target, then scans that block linearly.",
    code: r#"fn jump_search(arr: &[i64], target: i64) -> Option<usize> {
    let n = arr.len();
    let block = (n as f64).sqrt() as usize;
    if n == 0 {
        return None;
    }
    let (mut prev, mut step) = (0, block);
    while arr[step.min(n) - 1] < target {
        prev = step;
        step += block;
        if prev >= n {
            return None;
        }
    }
    (prev..step.min(n)).find(|&i| arr[i] == target)
}"#,
};

/// Which engine an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sorting,
    Searching,
}

/// Any algorithm the crate can trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
}

/// Output of running any [`Algorithm`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Sort(SortRun),
    Search(SearchRun),
}

impl Run {
    pub fn name(&self) -> &'static str {
        match self {
            Run::Sort(run) => run.name,
            Run::Search(run) => run.name,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Run::Sort(run) => run.len(),
            Run::Search(run) => run.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Narration of the step at `index`
    pub fn description_at(&self, index: usize) -> Option<&str> {
        match self {
            Run::Sort(run) => run.steps.get(index).map(|s| s.description.as_str()),
            Run::Search(run) => run.steps.get(index).map(|s| s.description.as_str()),
        }
    }

    /// Array snapshot at `index`
    pub fn array_at(&self, index: usize) -> Option<&[i64]> {
        match self {
            Run::Sort(run) => run.steps.get(index).map(|s| s.array.as_slice()),
            Run::Search(run) => run.steps.get(index).map(|s| s.array.as_slice()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            Run::Sort(run) => serde_json::to_string_pretty(run),
            Run::Search(run) => serde_json::to_string_pretty(run),
        }
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Sort(SortAlgorithm::Bubble),
        Algorithm::Sort(SortAlgorithm::Quick),
        Algorithm::Sort(SortAlgorithm::Merge),
        Algorithm::Sort(SortAlgorithm::Insertion),
        Algorithm::Search(SearchAlgorithm::Linear),
        Algorithm::Search(SearchAlgorithm::Binary),
        Algorithm::Search(SearchAlgorithm::Jump),
    ];

    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::Sort(alg) => alg.info(),
            Algorithm::Search(alg) => alg.info(),
        }
    }

    pub fn family(self) -> Family {
        match self {
            Algorithm::Sort(_) => Family::Sorting,
            Algorithm::Search(_) => Family::Searching,
        }
    }

    /// Short command-line identifier, e.g. `binary-search`
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::Sort(SortAlgorithm::Bubble) => "bubble",
            Algorithm::Sort(SortAlgorithm::Quick) => "quick",
            Algorithm::Sort(SortAlgorithm::Merge) => "merge",
            Algorithm::Sort(SortAlgorithm::Insertion) => "insertion",
            Algorithm::Search(SearchAlgorithm::Linear) => "linear",
            Algorithm::Search(SearchAlgorithm::Binary) => "binary",
            Algorithm::Search(SearchAlgorithm::Jump) => "jump",
        }
    }

    /// Produce a trace. `target` is ignored by sorting algorithms.
    pub fn run(self, input: &[i64], target: i64) -> Run {
        match self {
            Algorithm::Sort(alg) => Run::Sort(alg.run(input)),
            Algorithm::Search(alg) => Run::Search(alg.run(input, target)),
        }
    }

    /// Next algorithm in [`Algorithm::ALL`] order, wrapping around
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in [`Algorithm::ALL`] order, wrapping around
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&a| a == self).unwrap_or(0)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().name)
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    /// Accepts the slug (`quick`), the slug with its family suffix
    /// (`quick-sort`, `jump_search`) or the display name (`Quick Sort`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let stem = normalized
            .strip_suffix("-sort")
            .or_else(|| normalized.strip_suffix("-search"))
            .unwrap_or(&normalized);

        Self::ALL
            .iter()
            .copied()
            .find(|alg| alg.slug() == stem)
            .ok_or_else(|| InputError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}
