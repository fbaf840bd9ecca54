//! Canonical state fingerprints.
//!
//! A fingerprint is a SHA-256 digest of a board's alive-cell set in
//! canonical (x, then y) order. Two boards with the same alive set
//! produce the same fingerprint regardless of input order, which is
//! what makes generation-to-generation comparison cheap.
//!
//! Fingerprint equality is treated as state equality. Collisions are a
//! known theoretical risk that this design accepts.

use life_core::{Board, Cell};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 32-byte SHA-256 digest of a canonical cell set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Create a fingerprint from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Fingerprint(bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Fingerprint of a board's alive-cell set.
    pub fn of_board(board: &Board) -> Self {
        Self::of_cells(board.alive_cells().copied())
    }

    /// Fingerprint of a cell sequence already in canonical order.
    ///
    /// `Board::alive_cells` iterates in (x, then y) order, so callers
    /// holding a board never need to sort; raw cell lists must be
    /// sorted first (see `of_unsorted`).
    pub fn of_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut hasher = Hasher::new();
        for cell in cells {
            hasher.update(&cell.x.to_le_bytes());
            hasher.update(&cell.y.to_le_bytes());
        }
        hasher.finalize()
    }

    /// Fingerprint of an arbitrary cell list: sorts and deduplicates
    /// before hashing.
    pub fn of_unsorted(cells: impl IntoIterator<Item = Cell>) -> Self {
        let sorted: std::collections::BTreeSet<Cell> = cells.into_iter().collect();
        Self::of_cells(sorted)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 64 {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
            let hex_str = std::str::from_utf8(chunk).ok()?;
            bytes[i] = u8::from_str_radix(hex_str, 16).ok()?;
        }
        Some(Fingerprint(bytes))
    }

    /// Truncated display (first 8 chars).
    pub fn short(&self) -> String {
        self.to_hex()[..8].to_string()
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Streaming hasher over canonical cell encodings.
pub struct Hasher {
    inner: Sha256,
}

impl Hasher {
    pub fn new() -> Self {
        Hasher {
            inner: Sha256::new(),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    pub fn finalize(self) -> Fingerprint {
        let result = self.inner.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&result);
        Fingerprint(bytes)
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}
