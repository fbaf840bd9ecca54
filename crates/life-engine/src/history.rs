//! Per-generation audit records.

use chrono::{DateTime, Utc};
use life_core::{Board, BoardId, Cell};
use life_detect::Fingerprint;
use serde::{Deserialize, Serialize};

/// An immutable record of one generation's cell set and fingerprint,
/// keyed by `(board_id, generation)`.
///
/// Created once per generation advance and never mutated; retention is
/// the storage collaborator's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The lineage this generation belongs to.
    pub board_id: BoardId,

    /// The generation counter at the time of recording.
    pub generation: u64,

    /// The alive cells, in canonical (x, then y) order.
    pub alive_cells: Vec<Cell>,

    /// Hex-encoded fingerprint of the cell set.
    pub fingerprint: String,

    /// When the record was produced.
    pub recorded_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Capture a board's current generation.
    pub fn of_board(board: &Board) -> Self {
        HistoryRecord {
            board_id: board.id().clone(),
            generation: board.generation(),
            alive_cells: board.alive_cells().copied().collect(),
            fingerprint: Fingerprint::of_board(board).to_hex(),
            recorded_at: Utc::now(),
        }
    }
}
