//! Grid coordinates and neighborhood enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single 2D grid coordinate.
///
/// Coordinates are signed so that neighbor enumeration near the origin
/// stays total; whether a coordinate is actually on the grid is the
/// board's bounds check, not the coordinate's.
///
/// Ordering is lexicographic (x, then y), which gives cell sets a
/// canonical iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

/// Moore neighborhood offsets, row-major over (dx, dy), excluding (0, 0).
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Cell {
    /// Create a coordinate.
    pub fn new(x: i64, y: i64) -> Self {
        Cell { x, y }
    }

    /// The 8 Moore neighbors of this cell.
    ///
    /// The order is deterministic but carries no meaning; callers rely
    /// only on set membership. Neighbors may fall outside any grid
    /// bounds (including negative coordinates).
    pub fn neighbors(&self) -> [Cell; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| Cell::new(self.x + dx, self.y + dy))
    }

    /// Whether this cell lies inside `[0, max_dimension)` on both axes.
    pub fn in_bounds(&self, max_dimension: i64) -> bool {
        self.x >= 0 && self.x < max_dimension && self.y >= 0 && self.y < max_dimension
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Cell::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_neighbors_count_and_membership() {
        let cell = Cell::new(5, 5);
        let neighbors: BTreeSet<Cell> = cell.neighbors().into_iter().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&cell));

        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                assert!(neighbors.contains(&Cell::new(5 + dx, 5 + dy)));
            }
        }
    }

    #[test]
    fn test_neighbors_at_origin_go_negative() {
        let neighbors: BTreeSet<Cell> = Cell::new(0, 0).neighbors().into_iter().collect();
        assert!(neighbors.contains(&Cell::new(-1, -1)));
        assert!(neighbors.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_ordering_x_then_y() {
        assert!(Cell::new(1, 9) < Cell::new(2, 0));
        assert!(Cell::new(3, 1) < Cell::new(3, 2));
        assert_eq!(Cell::new(4, 4), Cell::new(4, 4));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Cell::new(0, 0).in_bounds(10));
        assert!(Cell::new(9, 9).in_bounds(10));
        assert!(!Cell::new(10, 9).in_bounds(10));
        assert!(!Cell::new(9, 10).in_bounds(10));
        assert!(!Cell::new(-1, 0).in_bounds(10));
    }

    #[test]
    fn test_serde_roundtrip() {
        let cell = Cell::new(3, -7);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
