//! # Introduction
//!
//! algotrace runs classic sorting and searching algorithms over small arrays
//! and records every micro-operation (comparison, swap, pivot selection,
//! bound update) as an immutable snapshot. The resulting trace can be
//! scrubbed forward and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui) or exported as JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Input array → Algorithm → StepRecorder → RunResult → Player → TUI
//! ```
//!
//! 1. [`sorting`] — bubble, quick, merge and insertion sort, each producing a
//!    [`trace::SortRun`].
//! 2. [`searching`] — linear, binary and jump search, each producing a
//!    [`trace::SearchRun`].
//! 3. [`trace`] — step records, the append-only recorder and run metadata.
//! 4. [`catalog`] — the algorithm registry: identifiers, metadata, code samples.
//! 5. [`player`] — a cursor over a finished trace.
//! 6. [`metrics`] — textbook operation-count estimates.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Every run clones its input, never fails, and yields at least two steps.
//!
//! ```
//! use algotrace::sorting::SortAlgorithm;
//!
//! let run = SortAlgorithm::Bubble.run(&[5, 3, 8, 1]);
//! assert_eq!(run.final_array(), &[1, 3, 5, 8]);
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod player;
pub mod searching;
pub mod sorting;
pub mod trace;
pub mod ui;
