//! Error types.

/// Errors returned by reconstruction routines.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Too few samples for the requested operation.
    #[error("Insufficient samples: {0}")]
    InsufficientSamples(String),

    /// Component grids with incompatible shapes.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Shape of the first component grid.
        expected: [usize; 2],
        /// Shape of the mismatched component grid.
        actual: [usize; 2],
    },
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
