//! Stability and cycle detection over an evolving board.
//!
//! The detector repeatedly advances a board and decides, generation by
//! generation, whether evolution has terminated: a fixed point (still
//! life or empty grid) or a periodic oscillation. Runs that exhaust
//! the iteration cap fail with [`NonConvergence`] rather than silently
//! returning the last board.

use crate::fingerprint::Fingerprint;
use life_core::Board;
use thiserror::Error;
use tracing::debug;

/// Configuration for a detection run.
#[derive(Clone, Debug)]
pub struct DetectorConfig {
    /// Maximum number of generation advances before giving up.
    pub max_iterations: usize,

    /// Number of consecutive identical fingerprints required to
    /// declare a fixed point.
    pub stable_state_threshold: usize,

    /// Longest cycle period the detector will search for.
    pub max_cycle_length: usize,

    /// Number of consecutive cycle repetitions required before a
    /// period is declared stable.
    pub cycle_stability_requirement: usize,

    /// Log progress every this many advances (0 disables).
    pub progress_log_interval: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            max_iterations: 1000,
            stable_state_threshold: 5,
            max_cycle_length: 20,
            cycle_stability_requirement: 3,
            progress_log_interval: 100,
        }
    }
}

/// How a run terminated.
///
/// Callers receive the current board either way; the verdict is not
/// enriched with period metadata (a still life whose cycle window
/// fills before the fixed-point window legitimately reports as
/// `Oscillating`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Fixed point: still life or empty grid.
    Stable,

    /// Periodic oscillation with period > 0.
    Oscillating,
}

/// A successful detection: the board at the generation where stability
/// was observed, plus how it got there.
#[derive(Clone, Debug)]
pub struct Detection {
    /// The board at the generation where the terminal condition held.
    pub board: Board,

    /// Which terminal condition fired.
    pub verdict: Verdict,

    /// Number of generation advances taken during the run.
    pub iterations: usize,
}

/// The run exhausted its iteration cap without reaching a terminal
/// condition.
///
/// This is a normal, expected outcome for chaotic or translating
/// patterns, not a system failure. The last-computed board rides along
/// so callers can still persist it.
#[derive(Error, Debug)]
#[error("no stable state reached within {iterations} iterations")]
pub struct NonConvergence {
    /// The iteration bound that was attempted.
    pub iterations: usize,

    /// The last board computed before giving up.
    pub board: Board,
}

/// Iterates `Board::next_generation` and decides termination.
///
/// Each iteration checks, in priority order: fixed-point stability,
/// periodic stability, empty grid; otherwise it advances. The
/// fingerprint history grows by one entry per advance and the cycle
/// scan is linear in it, which is bounded by `max_iterations`.
#[derive(Clone, Debug, Default)]
pub struct StabilityDetector {
    config: DetectorConfig,
}

impl StabilityDetector {
    /// Create a detector with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom configuration.
    pub fn with_config(config: DetectorConfig) -> Self {
        StabilityDetector { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run the board to a terminal condition or exhaustion.
    ///
    /// On success, returns the board at the generation where stability
    /// was detected (not the input, not a later probe).
    pub fn run(&self, board: Board) -> Result<Detection, NonConvergence> {
        let mut current = board;
        let mut history = vec![Fingerprint::of_board(&current)];
        let mut advances = 0usize;

        loop {
            if self.is_fixed_point(&history) {
                debug!(
                    board = %current.id(),
                    generation = current.generation(),
                    advances,
                    "fixed point reached"
                );
                return Ok(Detection {
                    board: current,
                    verdict: Verdict::Stable,
                    iterations: advances,
                });
            }

            if let Some(period) = self.find_cycle(&history) {
                debug!(
                    board = %current.id(),
                    generation = current.generation(),
                    advances,
                    period,
                    "oscillation reached"
                );
                return Ok(Detection {
                    board: current,
                    verdict: Verdict::Oscillating,
                    iterations: advances,
                });
            }

            if current.is_empty() {
                // The all-dead state is trivially a fixed point.
                return Ok(Detection {
                    board: current,
                    verdict: Verdict::Stable,
                    iterations: advances,
                });
            }

            if advances >= self.config.max_iterations {
                return Err(NonConvergence {
                    iterations: self.config.max_iterations,
                    board: current,
                });
            }

            current = current.next_generation();
            advances += 1;
            history.push(Fingerprint::of_board(&current));

            if self.config.progress_log_interval > 0
                && advances % self.config.progress_log_interval == 0
            {
                debug!(
                    board = %current.id(),
                    generation = current.generation(),
                    advances,
                    alive = current.cell_count(),
                    "detection in progress"
                );
            }
        }
    }

    /// The last `stable_state_threshold` fingerprints are all
    /// identical.
    fn is_fixed_point(&self, history: &[Fingerprint]) -> bool {
        let threshold = self.config.stable_state_threshold;
        if threshold == 0 || history.len() < threshold {
            return false;
        }
        let current = history[history.len() - 1];
        history[history.len() - threshold..]
            .iter()
            .all(|fp| *fp == current)
    }

    /// Smallest period `L` whose last `L` fingerprints repeat for the
    /// configured number of consecutive prior repetitions.
    fn find_cycle(&self, history: &[Fingerprint]) -> Option<usize> {
        let n = history.len();
        if n < 4 {
            return None;
        }

        let repetitions = self.config.cycle_stability_requirement.max(1);
        let max_period = self.config.max_cycle_length.min(n / 2);

        for period in 1..=max_period {
            // Need the full repetition window in history.
            if n < period * (repetitions + 1) {
                break;
            }
            let repeats = (1..=period).all(|i| {
                (1..=repetitions).all(|r| history[n - i] == history[n - i - r * period])
            });
            if repeats {
                return Some(period);
            }
        }
        None
    }
}
