//! # life-engine
//!
//! Orchestration layer for the lifegrid simulation engine.
//!
//! This crate provides:
//! - `BoardStore`: the async storage collaborator contract, with an
//!   in-memory implementation for tests and demos
//! - `HistoryRecord`: the per-generation audit record
//! - `BoardEvolutionService`: the next / N-ahead / final-state queries
//!   over a persisted board
//! - `EngineConfig`: defaults for bounds, iteration caps and detector
//!   thresholds
//!
//! ## Example
//!
//! ```rust
//! use life_core::Cell;
//! use life_engine::{BoardEvolutionService, MemoryBoardStore};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let service = BoardEvolutionService::new(Arc::new(MemoryBoardStore::new()));
//!
//! // Upload a blinker and step it once.
//! let cells = vec![Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)];
//! let board = service.create(cells, Some(5)).await.unwrap();
//! let next = service.next(board.id()).await.unwrap();
//! assert_eq!(next.generation(), 1);
//! # });
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod service;
pub mod state;
pub mod store;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::EngineError;
pub use history::HistoryRecord;
pub use service::BoardEvolutionService;
pub use state::BoardState;
pub use store::{BoardStore, MemoryBoardStore, StoreError};
