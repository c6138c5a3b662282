//! Search trace engine
//!
//! - [`linear`]: scans the caller's order as given
//! - [`binary`]: halves a `[left, right]` window over a sorted copy
//! - [`jump`]: probes `floor(sqrt(n))`-sized block boundaries, then scans one block
//!
//! "Not found" is an ordinary terminal step without `found`, never an error.

pub mod binary;
pub mod jump;
pub mod linear;

pub use binary::binary_search;
pub use jump::jump_search;
pub use linear::linear_search;

use crate::catalog::{self, AlgorithmInfo};
use crate::trace::{SearchRun, SearchStep};

/// Identifier of a searching algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Jump,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Jump,
    ];

    /// Run the algorithm over a copy of `input`
    pub fn run(self, input: &[i64], target: i64) -> SearchRun {
        let run = match self {
            SearchAlgorithm::Linear => linear_search(input, target),
            SearchAlgorithm::Binary => binary_search(input, target),
            SearchAlgorithm::Jump => jump_search(input, target),
        };
        tracing::debug!(
            algorithm = run.name,
            input_len = input.len(),
            target,
            found = ?run.found_index(),
            steps = run.len(),
            "search trace recorded"
        );
        run
    }

    /// Whether the algorithm searches a sorted copy rather than the input order
    pub fn requires_sorted(self) -> bool {
        !matches!(self, SearchAlgorithm::Linear)
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            SearchAlgorithm::Linear => &catalog::LINEAR_SEARCH,
            SearchAlgorithm::Binary => &catalog::BINARY_SEARCH,
            SearchAlgorithm::Jump => &catalog::JUMP_SEARCH,
        }
    }
}

fn sorted_copy(input: &[i64]) -> Vec<i64> {
    let mut array = input.to_vec();
    array.sort_unstable();
    array
}

fn not_found(array: &[i64], target: i64) -> SearchStep {
    SearchStep::new(
        array,
        target,
        format!("Target {} not found in the array.", target),
    )
}
