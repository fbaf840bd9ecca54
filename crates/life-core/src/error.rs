//! Error types for board construction.

use thiserror::Error;

/// Errors raised while validating a board's construction arguments.
///
/// Generation advance is a total function and never fails; every error
/// here surfaces synchronously at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("max dimension must be positive, got {0}")]
    InvalidDimension(i64),

    #[error("cell ({x}, {y}) is outside the grid bounds [0, {max_dimension})")]
    OutOfBounds { x: i64, y: i64, max_dimension: i64 },
}

pub type Result<T> = std::result::Result<T, BoardError>;
