//! Sort trace engine
//!
//! Each algorithm clones its input, sorts the clone and records a
//! [`SortStep`](crate::trace::SortStep) for every comparison, exchange and
//! "now in final position" event:
//! - [`bubble`]: adjacent compare/swap passes with early exit
//! - [`quick`]: last-element pivot, recursive partitioning
//! - [`merge`]: midpoint split, merge of contiguous runs
//! - [`insertion`]: shift-right insertion into the sorted prefix
//!
//! Every run starts with a narration step and ends with a step that marks all
//! indices sorted, so even empty and single-element inputs yield two steps.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use crate::catalog::{self, AlgorithmInfo};
use crate::trace::SortRun;

/// Identifier of a sorting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Merge,
    Insertion,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Insertion,
    ];

    /// Run the algorithm over a copy of `input`
    pub fn run(self, input: &[i64]) -> SortRun {
        let run = match self {
            SortAlgorithm::Bubble => bubble_sort(input),
            SortAlgorithm::Quick => quick_sort(input),
            SortAlgorithm::Merge => merge_sort(input),
            SortAlgorithm::Insertion => insertion_sort(input),
        };
        tracing::debug!(
            algorithm = run.name,
            input_len = input.len(),
            steps = run.len(),
            "sort trace recorded"
        );
        run
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            SortAlgorithm::Bubble => &catalog::BUBBLE_SORT,
            SortAlgorithm::Quick => &catalog::QUICK_SORT,
            SortAlgorithm::Merge => &catalog::MERGE_SORT,
            SortAlgorithm::Insertion => &catalog::INSERTION_SORT,
        }
    }
}
