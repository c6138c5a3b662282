//! Operation counts measured from a finished trace

use super::{SearchStep, SortStep};
use rustc_hash::FxHashMap;

/// Counts of what a trace actually did, as opposed to the textbook estimate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub comparisons: usize,
    pub swaps: usize,
    /// Search probes (steps with a `searching` highlight)
    pub probes: usize,
    /// How many steps highlighted each index
    pub touches: FxHashMap<usize, usize>,
}

impl TraceStats {
    pub fn from_sort_steps(steps: &[SortStep]) -> Self {
        let mut stats = TraceStats::default();
        for step in steps {
            if let Some(indices) = &step.comparing {
                stats.comparisons += 1;
                stats.touch_all(indices);
            }
            if let Some(indices) = &step.swapping {
                stats.swaps += 1;
                stats.touch_all(indices);
            }
        }
        stats
    }

    pub fn from_search_steps(steps: &[SearchStep]) -> Self {
        let mut stats = TraceStats::default();
        for step in steps {
            if let Some(indices) = &step.searching {
                stats.probes += 1;
                stats.touch_all(indices);
            }
        }
        stats
    }

    /// Index highlighted most often (lowest index wins ties)
    pub fn hottest_index(&self) -> Option<(usize, usize)> {
        self.touches
            .iter()
            .map(|(&idx, &count)| (idx, count))
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
    }

    fn touch_all(&mut self, indices: &[usize]) {
        for &idx in indices {
            *self.touches.entry(idx).or_insert(0) += 1;
        }
    }
}
