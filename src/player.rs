//! Cursor over a finished trace
//!
//! The player never re-runs an algorithm: it only moves an index over the
//! steps of a [`Run`]. Moving past either end is reported as a
//! [`PlaybackError`] and leaves the position unchanged.

use crate::catalog::Run;
use crate::errors::PlaybackError;
use crate::trace::TraceStats;

#[derive(Debug, Clone)]
pub struct Player {
    run: Run,
    position: usize,
    stats: TraceStats,
}

impl Player {
    /// Start at step 0 of `run`
    pub fn new(run: Run) -> Self {
        let stats = match &run {
            Run::Sort(run) => TraceStats::from_sort_steps(&run.steps),
            Run::Search(run) => TraceStats::from_search_steps(&run.steps),
        };
        Player {
            run,
            position: 0,
            stats,
        }
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    /// Operation counts for the whole trace
    pub fn stats(&self) -> &TraceStats {
        &self.stats
    }

    /// Current index into the steps
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_steps(&self) -> usize {
        self.run.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.total_steps()
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        tracing::trace!(position = self.position, "step forward");
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_start() {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        tracing::trace!(position = self.position, "step backward");
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.step_forward().is_err() {
                break;
            }
            stepped += 1;
        }
        stepped
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.total_steps().saturating_sub(1);
    }

    /// Narration of the current step
    pub fn description(&self) -> &str {
        self.run.description_at(self.position).unwrap_or("")
    }
}
