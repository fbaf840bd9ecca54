//! Immutable board snapshots and the generation-advance rule.
//!
//! A `Board` is one generation of a bounded, sparse Game of Life grid:
//! a set of alive cells, a generation counter, and the grid bound.
//! Boards never mutate; `next_generation` derives a new snapshot from
//! the previous one.

use crate::coordinate::Cell;
use crate::error::BoardError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ulid::Ulid;

/// Unique identifier for a board lineage.
///
/// Assigned once when generation 0 is created and shared by every
/// generation derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardId(pub String);

impl BoardId {
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One generation snapshot of a bounded sparse grid.
///
/// Invariants, enforced at construction:
/// - `max_dimension > 0`
/// - every alive cell satisfies `0 <= x < max_dimension` and
///   `0 <= y < max_dimension`
/// - the alive set is duplicate-free (a `BTreeSet`, which also gives
///   canonical (x, y) iteration order for fingerprinting)
///
/// `created_at` is fixed at generation 0 and preserved across every
/// descendant; `last_updated_at` is refreshed on each advance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    alive_cells: BTreeSet<Cell>,
    generation: u64,
    max_dimension: i64,
    created_at: DateTime<Utc>,
    last_updated_at: DateTime<Utc>,
}

impl Board {
    /// Create the generation-0 board of a new lineage.
    ///
    /// Duplicate input cells are silently deduplicated. Fails when the
    /// bound is non-positive or any cell falls outside it.
    pub fn new(
        id: BoardId,
        cells: impl IntoIterator<Item = Cell>,
        max_dimension: i64,
    ) -> Result<Self, BoardError> {
        let now = Utc::now();
        Self::rehydrated(id, cells, max_dimension, 0, now, now)
    }

    /// Reconstruct a board from persisted parts (any generation).
    ///
    /// Applies the same validation as `new`; storage round-trips are
    /// order-independent and duplicate-free on ingestion.
    pub fn rehydrated(
        id: BoardId,
        cells: impl IntoIterator<Item = Cell>,
        max_dimension: i64,
        generation: u64,
        created_at: DateTime<Utc>,
        last_updated_at: DateTime<Utc>,
    ) -> Result<Self, BoardError> {
        if max_dimension <= 0 {
            return Err(BoardError::InvalidDimension(max_dimension));
        }

        let mut alive_cells = BTreeSet::new();
        for cell in cells {
            if !cell.in_bounds(max_dimension) {
                return Err(BoardError::OutOfBounds {
                    x: cell.x,
                    y: cell.y,
                    max_dimension,
                });
            }
            alive_cells.insert(cell);
        }

        Ok(Board {
            id,
            alive_cells,
            generation,
            max_dimension,
            created_at,
            last_updated_at,
        })
    }

    /// Advance one generation.
    ///
    /// Pure: `self` is untouched and the result is a new snapshot with
    /// `generation + 1`, the same id, bound and `created_at`, and a
    /// fresh `last_updated_at`.
    ///
    /// Work is bounded by the alive set, not the grid area: the only
    /// candidates for life are currently-alive cells and their
    /// neighbors. Out-of-bounds candidates are discarded; the grid
    /// does not wrap.
    pub fn next_generation(&self) -> Board {
        let mut candidates: BTreeSet<Cell> = BTreeSet::new();
        for cell in &self.alive_cells {
            candidates.insert(*cell);
            for neighbor in cell.neighbors() {
                candidates.insert(neighbor);
            }
        }

        let mut next: BTreeSet<Cell> = BTreeSet::new();
        for candidate in candidates {
            if !candidate.in_bounds(self.max_dimension) {
                continue;
            }

            let alive_neighbors = candidate
                .neighbors()
                .iter()
                .filter(|n| self.alive_cells.contains(*n))
                .count();

            let alive_now = self.alive_cells.contains(&candidate);
            // Conway's rule: survive on 2 or 3, birth on exactly 3.
            let alive_next = match (alive_now, alive_neighbors) {
                (true, 2) | (true, 3) => true,
                (false, 3) => true,
                _ => false,
            };

            if alive_next {
                next.insert(candidate);
            }
        }

        Board {
            id: self.id.clone(),
            alive_cells: next,
            generation: self.generation + 1,
            max_dimension: self.max_dimension,
            created_at: self.created_at,
            last_updated_at: Utc::now(),
        }
    }

    /// Whether no cells are alive.
    pub fn is_empty(&self) -> bool {
        self.alive_cells.is_empty()
    }

    /// Set equality of alive cells, ignoring id, generation, bounds
    /// and timestamps.
    pub fn is_equivalent_to(&self, other: &Board) -> bool {
        self.alive_cells == other.alive_cells
    }

    /// Whether a specific cell is alive.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.alive_cells.contains(cell)
    }

    /// The alive cells in canonical (x, then y) order.
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> {
        self.alive_cells.iter()
    }

    /// Number of alive cells.
    pub fn cell_count(&self) -> usize {
        self.alive_cells.len()
    }

    pub fn id(&self) -> &BoardId {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn max_dimension(&self) -> i64 {
        self.max_dimension
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i64, i64)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn board(coords: &[(i64, i64)], max_dimension: i64) -> Board {
        Board::new(BoardId::new(), cells(coords), max_dimension).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_dimension() {
        let result = Board::new(BoardId::new(), vec![], 0);
        assert_eq!(result.unwrap_err(), BoardError::InvalidDimension(0));

        let result = Board::new(BoardId::new(), vec![], -5);
        assert_eq!(result.unwrap_err(), BoardError::InvalidDimension(-5));
    }

    #[test]
    fn test_rejects_out_of_bounds_cell() {
        let result = Board::new(BoardId::new(), cells(&[(10, 10)]), 10);
        assert_eq!(
            result.unwrap_err(),
            BoardError::OutOfBounds {
                x: 10,
                y: 10,
                max_dimension: 10
            }
        );

        // The corner just inside the bound is fine.
        assert!(Board::new(BoardId::new(), cells(&[(9, 9)]), 10).is_ok());
    }

    #[test]
    fn test_deduplicates_input_cells() {
        let b = board(&[(5, 5), (5, 5), (5, 6)], 10);
        assert_eq!(b.cell_count(), 2);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let vertical = board(&[(1, 0), (1, 1), (1, 2)], 5);

        let horizontal = vertical.next_generation();
        let expected: BTreeSet<Cell> = cells(&[(0, 1), (1, 1), (2, 1)]).into_iter().collect();
        assert_eq!(
            horizontal.alive_cells().copied().collect::<BTreeSet<_>>(),
            expected
        );

        let back = horizontal.next_generation();
        assert!(back.is_equivalent_to(&vertical));
        assert_eq!(back.generation(), 2);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = board(&[(0, 0), (0, 1), (1, 0), (1, 1)], 2);
        let next = block.next_generation();
        assert!(next.is_equivalent_to(&block));

        // Still holds on a much larger grid.
        let roomy = board(&[(0, 0), (0, 1), (1, 0), (1, 1)], 1000);
        assert!(roomy.next_generation().is_equivalent_to(&roomy));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let lone = board(&[(4, 4)], 10);
        let next = lone.next_generation();
        assert!(next.is_empty());
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let empty = board(&[], 10);
        assert!(empty.next_generation().is_empty());
    }

    #[test]
    fn test_no_birth_outside_bounds() {
        // A blinker hugging the edge: its horizontal phase would need
        // column -1, which is clipped rather than wrapped.
        let edge = board(&[(0, 0), (0, 1), (0, 2)], 3);
        let next = edge.next_generation();

        for cell in next.alive_cells() {
            assert!(cell.in_bounds(3));
        }
        // Only (0,1) and (1,1) survive/appear; (-1,1) is clipped.
        assert_eq!(next.cell_count(), 2);
        assert!(next.contains(&Cell::new(0, 1)));
        assert!(next.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_advance_preserves_lineage_metadata() {
        let b0 = board(&[(1, 0), (1, 1), (1, 2)], 5);
        let b1 = b0.next_generation();
        let b2 = b1.next_generation();

        assert_eq!(b1.id(), b0.id());
        assert_eq!(b2.id(), b0.id());
        assert_eq!(b1.generation(), 1);
        assert_eq!(b2.generation(), 2);
        assert_eq!(b1.max_dimension(), b0.max_dimension());
        assert_eq!(b1.created_at(), b0.created_at());
        assert_eq!(b2.created_at(), b0.created_at());
        assert!(b1.last_updated_at() >= b0.last_updated_at());
        assert!(b2.last_updated_at() >= b1.last_updated_at());
    }

    #[test]
    fn test_rehydration_roundtrip() {
        let original = board(&[(3, 3), (1, 1), (2, 2)], 10);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
        assert!(restored.is_equivalent_to(&original));
    }

    #[test]
    fn test_rehydrated_keeps_generation_counter() {
        let now = Utc::now();
        let b = Board::rehydrated(
            BoardId::from_string("board-1"),
            cells(&[(2, 2)]),
            10,
            42,
            now,
            now,
        )
        .unwrap();

        assert_eq!(b.generation(), 42);
        assert_eq!(b.next_generation().generation(), 43);
    }

    #[test]
    fn test_equivalence_ignores_identity_and_generation() {
        let a = board(&[(1, 1), (2, 2)], 10);
        let b = Board::rehydrated(
            BoardId::from_string("other"),
            cells(&[(2, 2), (1, 1)]),
            50,
            7,
            Utc::now(),
            Utc::now(),
        )
        .unwrap();

        assert!(a.is_equivalent_to(&b));
    }
}
