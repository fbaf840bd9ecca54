//! Board storage trait and in-memory implementation.
//!
//! The engine treats storage as a narrow, last-writer-wins
//! collaborator: fetch a board, store a board, append a history
//! record. No merge logic, no retries; failures propagate to the
//! caller immediately.

use crate::history::HistoryRecord;
use async_trait::async_trait;
use life_core::{Board, BoardId};
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the storage collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No board with this identifier.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Opaque backend failure.
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// State could not be (de)serialized at the storage boundary.
    #[error("serialization failure: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Abstract board storage.
///
/// `store` is last-writer-wins with no isolation guarantees:
/// concurrent read-modify-write sequences against the same board
/// identifier can race, and resolving that is the implementation's
/// concern, not the engine's.
#[async_trait]
pub trait BoardStore: Send + Sync + 'static {
    /// Fetch the current snapshot of a board.
    async fn fetch(&self, id: &BoardId) -> Result<Board, StoreError>;

    /// Persist a board snapshot, replacing any previous one.
    async fn store(&self, board: Board) -> Result<(), StoreError>;

    /// Append one generation's audit record.
    async fn append_history(&self, record: HistoryRecord) -> Result<(), StoreError>;

    /// Read a board's audit trail, ordered by generation.
    async fn history(&self, id: &BoardId) -> Result<Vec<HistoryRecord>, StoreError>;
}

/// In-memory store for tests, demos and the stress harness.
#[derive(Default)]
pub struct MemoryBoardStore {
    boards: RwLock<HashMap<BoardId, Board>>,
    history: RwLock<HashMap<BoardId, Vec<HistoryRecord>>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored boards.
    pub fn len(&self) -> usize {
        self.boards.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn fetch(&self, id: &BoardId) -> Result<Board, StoreError> {
        self.boards
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn store(&self, board: Board) -> Result<(), StoreError> {
        self.boards.write().insert(board.id().clone(), board);
        Ok(())
    }

    async fn append_history(&self, record: HistoryRecord) -> Result<(), StoreError> {
        self.history
            .write()
            .entry(record.board_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn history(&self, id: &BoardId) -> Result<Vec<HistoryRecord>, StoreError> {
        let mut records = self
            .history
            .read()
            .get(id)
            .cloned()
            .unwrap_or_default();
        records.sort_by_key(|r| r.generation);
        Ok(records)
    }
}
