//! Error types for the evolution engine.

use crate::store::StoreError;
use life_core::{BoardError, BoardId};
use thiserror::Error;

/// Errors surfaced by the board evolution service.
///
/// Nothing is swallowed or retried: each operation either fully
/// succeeds or propagates one of these to the caller. Transport-level
/// status mapping is the API layer's concern, not this crate's.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The referenced board does not exist in storage.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// A negative generation count was requested.
    #[error("generation count must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// A stability run exhausted its iteration cap. Expected for
    /// chaotic or translating patterns; distinct from system failure.
    #[error("no stable state reached within {iterations} iterations")]
    NonConvergence { iterations: usize },

    /// Board construction was rejected.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            // A missing board is its own case, not a storage fault.
            StoreError::NotFound(id) => EngineError::NotFound(id),
            other => EngineError::Storage(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
