//! Step records and the append-only recorder shared by every algorithm
//!
//! This module provides the data model of a trace:
//! - [`SortStep`]: one snapshot of a sorting run
//! - [`SearchStep`]: one snapshot of a searching run
//! - [`RunResult`]: metadata plus the ordered step sequence of one run
//! - [`StepRecorder`]: the collector threaded through (possibly recursive) algorithms
//!
//! # Snapshot discipline
//!
//! Every step carries a full copy of the array, never a diff, so replaying
//! `steps[..=k]` shows exactly the algorithm's execution prefix. Optional
//! fields are `None` when they carry no meaning at that instant and are left
//! out of the serialized record, so consumers can match on their presence.

mod stats;

pub use stats::TraceStats;

use serde::Serialize;

/// Snapshot of a sorting run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortStep {
    pub array: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparing: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapping: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
    pub description: String,
}

impl SortStep {
    /// Plain narration step: array copy and description, nothing highlighted
    pub fn new(array: &[i64], description: impl Into<String>) -> Self {
        SortStep {
            array: array.to_vec(),
            comparing: None,
            swapping: None,
            sorted: None,
            pivot: None,
            description: description.into(),
        }
    }

    pub fn comparing(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.comparing = Some(indices.into());
        self
    }

    pub fn swapping(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.swapping = Some(indices.into());
        self
    }

    pub fn sorted(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.sorted = Some(indices.into());
        self
    }

    pub fn pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }
}

/// Snapshot of a searching run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStep {
    pub array: Vec<i64>,
    pub target: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searching: Option<Vec<usize>>,
    /// Set once, on the terminal step of a successful run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<isize>,
    /// Can drop to -1 once the window closes below index 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<isize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    pub description: String,
}

impl SearchStep {
    pub fn new(array: &[i64], target: i64, description: impl Into<String>) -> Self {
        SearchStep {
            array: array.to_vec(),
            target,
            searching: None,
            found: None,
            left: None,
            right: None,
            mid: None,
            description: description.into(),
        }
    }

    pub fn searching(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.searching = Some(indices.into());
        self
    }

    pub fn found(mut self, index: usize) -> Self {
        self.found = Some(index);
        self
    }

    pub fn bounds(mut self, left: isize, right: isize) -> Self {
        self.left = Some(left);
        self.right = Some(right);
        self
    }

    pub fn mid(mut self, index: usize) -> Self {
        self.mid = Some(index);
        self
    }
}

/// Textbook time complexity, informational only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Complete output of one algorithm invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult<S> {
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: Complexity,
    pub space_complexity: &'static str,
    pub steps: Vec<S>,
}

pub type SortRun = RunResult<SortStep>;
pub type SearchRun = RunResult<SearchStep>;

impl<S> RunResult<S> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_step(&self) -> Option<&S> {
        self.steps.last()
    }
}

impl SortRun {
    /// Array state after the last step
    pub fn final_array(&self) -> &[i64] {
        self.steps.last().map(|s| s.array.as_slice()).unwrap_or(&[])
    }
}

impl SearchRun {
    /// Index reported by the terminal success step, if the run found its target
    pub fn found_index(&self) -> Option<usize> {
        self.steps.last().and_then(|s| s.found)
    }

    /// The array the run actually searched (sorted for bound-based algorithms)
    pub fn searched_array(&self) -> &[i64] {
        self.steps.first().map(|s| s.array.as_slice()).unwrap_or(&[])
    }
}

/// Append-only step collector
///
/// Recursive algorithms take `&mut StepRecorder` so nested calls append to the
/// same sequence in call order.
#[derive(Debug)]
pub struct StepRecorder<S> {
    steps: Vec<S>,
}

impl<S> StepRecorder<S> {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Add a step to the trace
    pub fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace
    pub fn finish(self) -> Vec<S> {
        self.steps
    }
}

impl<S> Default for StepRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every index of an array of length `n`
pub(crate) fn all_indices(n: usize) -> Vec<usize> {
    (0..n).collect()
}
