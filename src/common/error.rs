//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Only input validation and report output can fail. Once a simulation has
/// accepted its inputs, every step is infallible.
#[derive(Debug, Error)]
pub enum Error {
    /// The frame table must hold at least one slot.
    ///
    /// Raised before any simulation step runs, so no partial trace exists.
    #[error("Invalid capacity: {0} (must be at least 1 frame)")]
    InvalidCapacity(usize),

    /// A reference value fell outside the non-negative alphabet.
    #[error("Invalid reference at position {index}: {value} (must be non-negative)")]
    InvalidSequence { index: usize, value: i64 },

    /// The generator cannot draw from an empty value range.
    #[error("Invalid value range: {0} (must be at least 1)")]
    InvalidValueRange(u32),

    /// A textual reference sequence contained an unparsable token.
    #[error("Cannot parse reference sequence: {0}")]
    Parse(String),

    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a simulation result.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
