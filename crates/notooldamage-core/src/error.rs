//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A region was constructed with a lower corner above its upper corner.
    #[error("inverted {axis} bounds on region '{region}': {min} > {max}")]
    InvertedBounds {
        /// The region being constructed.
        region: String,
        /// The offending axis (`x`, `y` or `z`).
        axis: char,
        /// The lower bound supplied.
        min: i32,
        /// The upper bound supplied.
        max: i32,
    },
}
