// File: `crates/life-core/src/lib.rs`
pub mod board;
pub mod coordinate;
pub mod error;

pub use board::{Board, BoardId};
pub use coordinate::Cell;
pub use error::BoardError;
