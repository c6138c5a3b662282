//! Textbook operation-count estimates
//!
//! The estimate is derived from each algorithm's complexity class, not from
//! the trace. [`TraceStats`](crate::trace::TraceStats) holds what a trace
//! actually recorded.

use crate::catalog::Algorithm;
use crate::searching::SearchAlgorithm;
use crate::sorting::SortAlgorithm;

/// Estimated operation count for `algorithm` over `n` elements
///
/// Sizes 0 and 1 estimate zero work for the logarithmic classes instead of
/// producing negative or NaN counts.
pub fn estimate_operations(algorithm: Algorithm, n: usize) -> u64 {
    let n_f = n as f64;
    let log_n = if n > 1 { n_f.log2() } else { 0.0 };

    let ops = match algorithm {
        Algorithm::Sort(SortAlgorithm::Bubble) | Algorithm::Sort(SortAlgorithm::Insertion) => {
            n_f * n_f
        }
        Algorithm::Sort(SortAlgorithm::Quick) | Algorithm::Sort(SortAlgorithm::Merge) => {
            n_f * log_n
        }
        Algorithm::Search(SearchAlgorithm::Linear) => n_f,
        Algorithm::Search(SearchAlgorithm::Binary) => log_n,
        Algorithm::Search(SearchAlgorithm::Jump) => n_f.sqrt(),
    };

    ops.round() as u64
}

/// Human-readable time for `ops` operations at one operation per microsecond
pub fn format_estimated_time(ops: u64) -> String {
    if ops < 1_000 {
        format!("{} μs", ops)
    } else if ops < 1_000_000 {
        format!("{:.1} ms", ops as f64 / 1_000.0)
    } else {
        format!("{:.2} s", ops as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimates_follow_complexity_class() {
        let bubble = Algorithm::Sort(SortAlgorithm::Bubble);
        let merge = Algorithm::Sort(SortAlgorithm::Merge);
        let binary = Algorithm::Search(SearchAlgorithm::Binary);
        let jump = Algorithm::Search(SearchAlgorithm::Jump);

        assert_eq!(estimate_operations(bubble, 10), 100);
        assert_eq!(estimate_operations(merge, 8), 24);
        assert_eq!(estimate_operations(binary, 1024), 10);
        assert_eq!(estimate_operations(jump, 49), 7);
    }

    #[test]
    fn test_degenerate_sizes_estimate_zero() {
        for alg in Algorithm::ALL {
            assert_eq!(estimate_operations(alg, 0), 0);
        }
        assert_eq!(
            estimate_operations(Algorithm::Sort(SortAlgorithm::Quick), 1),
            0
        );
    }

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_estimated_time(400), "400 μs");
        assert_eq!(format_estimated_time(40_000), "40.0 ms");
        assert_eq!(format_estimated_time(2_500_000), "2.50 s");
    }
}
