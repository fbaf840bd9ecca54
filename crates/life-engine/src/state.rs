//! Serializable board-state view.

use chrono::{DateTime, Utc};
use life_core::{Board, Cell};
use serde::{Deserialize, Serialize};

/// The board shape returned across the API boundary.
///
/// A flat, serializable snapshot of everything a caller learns about a
/// board: identity, bounds, the ordered alive-cell list and derived
/// counts and flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub id: String,
    pub generation: u64,
    pub max_dimension: i64,
    /// Alive cells in canonical (x, then y) order.
    pub alive_cells: Vec<Cell>,
    pub cell_count: usize,
    pub is_empty: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        BoardState {
            id: board.id().to_string(),
            generation: board.generation(),
            max_dimension: board.max_dimension(),
            alive_cells: board.alive_cells().copied().collect(),
            cell_count: board.cell_count(),
            is_empty: board.is_empty(),
            created_at: board.created_at(),
            last_updated_at: board.last_updated_at(),
        }
    }
}
