//! Error types for the surfaces around the trace engines
//!
//! The engines themselves never fail: every finite input produces a
//! well-formed run. What can fail is everything a user touches:
//! - [`InputError`]: command-line arrays, targets, sizes and algorithm names
//! - [`PlaybackError`]: stepping a player past either end of a trace
//! - [`Error`]: top-level wrapper used by the binary, including terminal I/O

use thiserror::Error;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token in an array literal is not an integer
    #[error("Invalid array element '{token}': expected an integer")]
    InvalidNumber { token: String },

    /// An array literal contained no elements
    #[error("Array input is empty")]
    EmptyArray,

    /// Requested random array size outside the allowed range
    #[error("Array size {size} out of range ({min}..={max})")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    /// Random value range with min greater than max
    #[error("Invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// Algorithm name not in the catalog
    #[error("Unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    /// A search target was supplied for a sorting algorithm
    #[error("{algorithm} does not take a target")]
    UnexpectedTarget { algorithm: &'static str },
}

/// Navigation past either end of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Already at the beginning of the trace")]
    AtStart,

    #[error("No more steps available (trace finished)")]
    AtEnd,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode trace: {0}")]
    Json(#[from] serde_json::Error),
}
