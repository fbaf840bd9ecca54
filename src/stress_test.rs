use async_stream::stream;
use chrono::Utc;
use futures::stream::Stream;
use futures::stream::StreamExt;
use life_core::{Board, BoardId, Cell};
use life_detect::{DetectorConfig, StabilityDetector};
use life_engine::{BoardEvolutionService, MemoryBoardStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Statistics collected during stress testing
#[derive(Clone, Debug)]
pub struct StressTestStats {
    pub num_boards: usize,
    pub generations_per_board: usize,
    pub total_generations: usize,
    pub total_time: Duration,
    pub avg_generation_time: Duration,
    pub generations_per_second: f64,
}

impl StressTestStats {
    pub fn print(&self) {
        println!("\n╔════════════════════════════════════════════════════════════╗");
        println!("║              Stress Test Statistics                         ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║  Number of Boards:          {:>38} ║", self.num_boards);
        println!("║  Generations per Board:     {:>38} ║", self.generations_per_board);
        println!("║  Total Generations:         {:>38} ║", self.total_generations);
        println!("║  Total Time:                {:>39}s ║", format!("{:.3}", self.total_time.as_secs_f64()));
        println!("║  Average Generation Time:   {:>36}µs ║", format!("{:.2}", self.avg_generation_time.as_micros()));
        println!("║  Generations/Second:        {:>38.0} ║", self.generations_per_second);
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

/// Generator that yields random soup patterns for board creation
fn soup_generator(
    num_boards: usize,
    dimension: i64,
    cells_per_board: usize,
) -> impl Stream<Item = Vec<Cell>> {
    stream! {
        let mut rng = StdRng::from_entropy();
        for _ in 0..num_boards {
            let cells: Vec<Cell> = (0..cells_per_board)
                .map(|_| Cell::new(rng.gen_range(0..dimension), rng.gen_range(0..dimension)))
                .collect();
            yield cells;
        }
    }
}

/// Stress the evolution service: many independent board lineages
/// advanced concurrently through the persisted-board path.
pub async fn stress_test_advance(
    num_boards: usize,
    generations_per_board: usize,
    dimension: i64,
    cells_per_board: usize,
) -> StressTestStats {
    println!(
        "\n→ advance stress: {} boards × {} generations on a {}×{} grid ({} soup cells), started {}",
        num_boards,
        generations_per_board,
        dimension,
        dimension,
        cells_per_board,
        Utc::now().format("%H:%M:%S")
    );

    let service = Arc::new(BoardEvolutionService::new(Arc::new(MemoryBoardStore::new())));

    // Upload all soups first
    let mut board_ids = Vec::with_capacity(num_boards);
    let soups = soup_generator(num_boards, dimension, cells_per_board);
    futures::pin_mut!(soups);
    while let Some(cells) = soups.next().await {
        let board = service
            .create(cells, Some(dimension))
            .await
            .expect("soup cells are in bounds by construction");
        board_ids.push(board.id().clone());
    }

    // Advance every lineage concurrently
    let start = Instant::now();
    let mut handles = Vec::with_capacity(num_boards);
    for id in board_ids {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .advance(&id, generations_per_board as i64)
                .await
                .expect("advance on a stored board cannot fail")
        }));
    }
    for handle in handles {
        handle.await.expect("stress task panicked");
    }
    let total_time = start.elapsed();

    let total_generations = num_boards * generations_per_board;
    StressTestStats {
        num_boards,
        generations_per_board,
        total_generations,
        total_time,
        avg_generation_time: total_time / total_generations.max(1) as u32,
        generations_per_second: total_generations as f64 / total_time.as_secs_f64(),
    }
}

/// Scaling analysis: fixed soup size on a growing grid.
///
/// The sparse candidate-set advance does work proportional to the
/// alive population, so doubling the grid bound at a fixed soup size
/// should leave per-generation cost roughly flat. A full-grid scan
/// would quadruple it each step.
pub async fn stress_test_scaling(cells_per_board: usize, generations: usize, doublings: usize) {
    let mut dimension: i64 = 64;

    println!(
        "\n{:>12} {:>14} {:>18} {:>16}",
        "dimension", "grid cells", "time/generation", "alive at end"
    );

    for _ in 0..=doublings {
        let mut rng = StdRng::from_entropy();
        let cells: Vec<Cell> = (0..cells_per_board)
            .map(|_| Cell::new(rng.gen_range(0..dimension), rng.gen_range(0..dimension)))
            .collect();
        let mut board = Board::new(BoardId::new(), cells, dimension)
            .expect("soup cells are in bounds by construction");

        let start = Instant::now();
        for _ in 0..generations {
            board = board.next_generation();
        }
        let per_generation = start.elapsed() / generations.max(1) as u32;

        println!(
            "{:>12} {:>14} {:>16}µs {:>16}",
            dimension,
            dimension * dimension,
            per_generation.as_micros(),
            board.cell_count()
        );

        dimension *= 2;
    }
}

/// Stability stress: random soups run through the detector until they
/// settle or exhaust; reports the outcome mix.
pub async fn stress_test_stability(num_boards: usize, dimension: i64, cells_per_board: usize) {
    let detector = StabilityDetector::with_config(DetectorConfig {
        max_iterations: 2000,
        progress_log_interval: 0,
        ..Default::default()
    });

    let mut settled = 0usize;
    let mut exhausted = 0usize;
    let mut total_iterations = 0usize;

    let soups = soup_generator(num_boards, dimension, cells_per_board);
    futures::pin_mut!(soups);
    while let Some(cells) = soups.next().await {
        let board = Board::new(BoardId::new(), cells, dimension)
            .expect("soup cells are in bounds by construction");
        match detector.run(board) {
            Ok(detection) => {
                settled += 1;
                total_iterations += detection.iterations;
            }
            Err(err) => {
                exhausted += 1;
                total_iterations += err.iterations;
            }
        }
    }

    println!(
        "\n→ stability stress: {}/{} soups settled, {} exhausted, {} generations simulated",
        settled, num_boards, exhausted, total_iterations
    );
}
