//! The board evolution service.
//!
//! Thin orchestration over the simulation core: each operation is a
//! pure composition of `Board` / `StabilityDetector` atop the storage
//! collaborator. The service holds no locks across fetch and persist;
//! operations on different board identifiers are fully independent,
//! and same-board races resolve last-writer-wins in storage.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::history::HistoryRecord;
use crate::store::BoardStore;
use life_core::{Board, BoardId, Cell};
use life_detect::StabilityDetector;
use std::sync::Arc;
use tracing::info;

/// Orchestrates the next / N-ahead / final-state queries over a
/// persisted board.
pub struct BoardEvolutionService<S: BoardStore> {
    store: Arc<S>,
    config: EngineConfig,
}

impl<S: BoardStore> BoardEvolutionService<S> {
    /// Create a service over a storage collaborator with default
    /// configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(store: Arc<S>, config: EngineConfig) -> Self {
        BoardEvolutionService { store, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create and persist the generation-0 board of a new lineage.
    ///
    /// Duplicate cells are deduplicated; the bound defaults from
    /// configuration when not supplied.
    pub async fn create(&self, cells: Vec<Cell>, max_dimension: Option<i64>) -> Result<Board> {
        let max_dimension = max_dimension.unwrap_or(self.config.default_max_dimension);
        let board = Board::new(BoardId::new(), cells, max_dimension)?;

        self.store.store(board.clone()).await?;
        self.store
            .append_history(HistoryRecord::of_board(&board))
            .await?;

        info!(
            board = %board.id(),
            max_dimension,
            alive = board.cell_count(),
            "board created"
        );
        Ok(board)
    }

    /// Fetch a board's current snapshot.
    pub async fn get(&self, id: &BoardId) -> Result<Board> {
        Ok(self.store.fetch(id).await?)
    }

    /// Advance one generation and persist the result.
    pub async fn next(&self, id: &BoardId) -> Result<Board> {
        let board = self.store.fetch(id).await?;
        let next = board.next_generation();

        self.store.store(next.clone()).await?;
        self.store
            .append_history(HistoryRecord::of_board(&next))
            .await?;

        info!(board = %id, generation = next.generation(), "advanced one generation");
        Ok(next)
    }

    /// Advance exactly `n` generations and persist the result.
    ///
    /// `n == 0` returns the fetched board unchanged without writing
    /// anything. Each intermediate generation's history record is
    /// appended as it is produced.
    pub async fn advance(&self, id: &BoardId, n: i64) -> Result<Board> {
        if n < 0 {
            return Err(EngineError::InvalidArgument(n));
        }

        let mut current = self.store.fetch(id).await?;
        if n == 0 {
            return Ok(current);
        }

        for _ in 0..n {
            current = current.next_generation();
            self.store
                .append_history(HistoryRecord::of_board(&current))
                .await?;
        }
        self.store.store(current.clone()).await?;

        info!(
            board = %id,
            steps = n,
            generation = current.generation(),
            "advanced n generations"
        );
        Ok(current)
    }

    /// Run the board to a terminal condition and persist the result.
    ///
    /// The final board is persisted unconditionally: on
    /// non-convergence the last-computed generation is still saved
    /// before the failure propagates.
    pub async fn run_to_stability(
        &self,
        id: &BoardId,
        max_iterations: Option<usize>,
        stable_state_threshold: Option<usize>,
    ) -> Result<Board> {
        let board = self.store.fetch(id).await?;
        let detector_config = self
            .config
            .detector_config(max_iterations, stable_state_threshold);
        let detector = StabilityDetector::with_config(detector_config);

        match detector.run(board) {
            Ok(detection) => {
                self.persist(&detection.board).await?;
                info!(
                    board = %id,
                    generation = detection.board.generation(),
                    iterations = detection.iterations,
                    verdict = ?detection.verdict,
                    "stability reached"
                );
                Ok(detection.board)
            }
            Err(err) => {
                self.persist(&err.board).await?;
                info!(
                    board = %id,
                    generation = err.board.generation(),
                    iterations = err.iterations,
                    "stability run exhausted"
                );
                Err(EngineError::NonConvergence {
                    iterations: err.iterations,
                })
            }
        }
    }

    async fn persist(&self, board: &Board) -> Result<()> {
        self.store.store(board.clone()).await?;
        self.store
            .append_history(HistoryRecord::of_board(board))
            .await?;
        Ok(())
    }
}
