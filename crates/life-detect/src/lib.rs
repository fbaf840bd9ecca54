//! # life-detect
//!
//! State fingerprinting and stability detection for the lifegrid
//! engine.
//!
//! This crate provides:
//! - `Fingerprint`: canonical, order-independent SHA-256 digest of an
//!   alive-cell set, used to compare generations cheaply
//! - `StabilityDetector`: iterates generation advance and decides when
//!   an evolving board has finished changing (fixed point, periodic
//!   oscillation, empty grid) or must be reported as non-converging
//!
//! ## Example
//!
//! ```rust
//! use life_core::{Board, BoardId, Cell};
//! use life_detect::StabilityDetector;
//!
//! // A 2x2 block is its own next generation.
//! let block = Board::new(
//!     BoardId::new(),
//!     vec![
//!         Cell::new(0, 0),
//!         Cell::new(0, 1),
//!         Cell::new(1, 0),
//!         Cell::new(1, 1),
//!     ],
//!     10,
//! )
//! .unwrap();
//!
//! let detection = StabilityDetector::new().run(block.clone()).unwrap();
//! assert!(detection.board.is_equivalent_to(&block));
//! ```

mod detector;
mod fingerprint;

pub use detector::{Detection, DetectorConfig, NonConvergence, StabilityDetector, Verdict};
pub use fingerprint::{Fingerprint, Hasher};
