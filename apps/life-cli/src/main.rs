//! # life-cli
//!
//! A standalone CLI for the lifegrid engine. Uploads well-known
//! patterns (or random soups) into an in-memory store, then drives the
//! three persisted-board queries against them: next generation, N
//! generations ahead, and run-to-stability.
//!
//! ## Grid rendering
//!
//! ```text
//! · · █ · ·        alive cell  →  █
//! · · █ · ·        dead cell   →  ·
//! · · █ · ·
//! ```

use clap::{Parser, Subcommand};
use colored::*;
use life_core::{Board, Cell};
use life_engine::{BoardEvolutionService, BoardState, EngineError, MemoryBoardStore};
use rand::Rng;
use std::sync::Arc;

// ─── CLI ───────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "life-cli")]
#[command(about = "Sparse Game of Life engine demo (lifegrid)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a blinker through a few generations
    Demo {
        /// Number of generations to step through
        #[arg(short, long, default_value_t = 4)]
        steps: i64,
    },
    /// Run a still life to stability
    Still,
    /// Chase a glider until the iteration cap trips (non-convergence)
    Glider {
        /// Iteration cap for the stability run
        #[arg(short, long, default_value_t = 10)]
        max_iterations: usize,
    },
    /// Upload a random soup and run it to its final state
    Soup {
        /// Grid bound
        #[arg(short, long, default_value_t = 20)]
        dimension: i64,
        /// Number of random alive cells
        #[arg(short, long, default_value_t = 60)]
        cells: usize,
    },
}

// ─── Patterns ──────────────────────────────────────────────────────────────

fn blinker() -> Vec<Cell> {
    vec![Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)]
}

fn block() -> Vec<Cell> {
    vec![
        Cell::new(1, 1),
        Cell::new(1, 2),
        Cell::new(2, 1),
        Cell::new(2, 2),
    ]
}

fn glider() -> Vec<Cell> {
    vec![
        Cell::new(1, 0),
        Cell::new(2, 1),
        Cell::new(0, 2),
        Cell::new(1, 2),
        Cell::new(2, 2),
    ]
}

fn random_soup(dimension: i64, count: usize) -> Vec<Cell> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Cell::new(rng.gen_range(0..dimension), rng.gen_range(0..dimension)))
        .collect()
}

// ─── Rendering ─────────────────────────────────────────────────────────────

fn render(board: &Board) {
    let dim = board.max_dimension().min(40);
    println!(
        "{}",
        format!(
            "  generation {} · {} alive · board {}",
            board.generation(),
            board.cell_count(),
            board.id().to_string().dimmed()
        )
        .bold()
    );
    for y in 0..dim {
        print!("  ");
        for x in 0..dim {
            if board.contains(&Cell::new(x, y)) {
                print!("{} ", "█".green());
            } else {
                print!("{} ", "·".dimmed());
            }
        }
        println!();
    }
    println!();
}

fn print_state_json(board: &Board) {
    let state = BoardState::from(board);
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json.dimmed()),
        Err(e) => eprintln!("{} {}", "could not render state:".red(), e),
    }
}

// ─── Commands ──────────────────────────────────────────────────────────────

async fn run_demo(
    service: &BoardEvolutionService<MemoryBoardStore>,
    steps: i64,
) -> Result<(), EngineError> {
    println!("{}", "Blinker: period-2 oscillator".bold().cyan());
    let board = service.create(blinker(), Some(5)).await?;
    render(&board);

    for _ in 0..steps {
        let next = service.next(board.id()).await?;
        render(&next);
    }
    Ok(())
}

async fn run_still(service: &BoardEvolutionService<MemoryBoardStore>) -> Result<(), EngineError> {
    println!("{}", "Block: still life, fixed point".bold().cyan());
    let board = service.create(block(), Some(6)).await?;
    render(&board);

    let stable = service.run_to_stability(board.id(), None, None).await?;
    println!("{}", "reached a stable state".green().bold());
    render(&stable);
    print_state_json(&stable);
    Ok(())
}

async fn run_glider(
    service: &BoardEvolutionService<MemoryBoardStore>,
    max_iterations: usize,
) -> Result<(), EngineError> {
    println!("{}", "Glider: translating spaceship".bold().cyan());
    let board = service.create(glider(), Some(50)).await?;
    render(&board);

    match service
        .run_to_stability(board.id(), Some(max_iterations), None)
        .await
    {
        Ok(stable) => {
            println!("{}", "settled (hit the wall)".green().bold());
            render(&stable);
        }
        Err(EngineError::NonConvergence { iterations }) => {
            println!(
                "{}",
                format!("did not converge within {} iterations (expected)", iterations)
                    .yellow()
                    .bold()
            );
            let last = service.get(board.id()).await?;
            render(&last);
        }
        Err(other) => return Err(other),
    }
    Ok(())
}

async fn run_soup(
    service: &BoardEvolutionService<MemoryBoardStore>,
    dimension: i64,
    cells: usize,
) -> Result<(), EngineError> {
    println!("{}", "Random soup".bold().cyan());
    let board = service.create(random_soup(dimension, cells), Some(dimension)).await?;
    render(&board);

    match service.run_to_stability(board.id(), None, None).await {
        Ok(stable) => {
            println!(
                "{}",
                format!("final state at generation {}", stable.generation())
                    .green()
                    .bold()
            );
            render(&stable);
        }
        Err(EngineError::NonConvergence { iterations }) => {
            println!(
                "{}",
                format!("still evolving after {} iterations", iterations)
                    .yellow()
                    .bold()
            );
            let last = service.get(board.id()).await?;
            render(&last);
        }
        Err(other) => return Err(other),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let service = BoardEvolutionService::new(Arc::new(MemoryBoardStore::new()));

    let result = match cli.command {
        Commands::Demo { steps } => run_demo(&service, steps).await,
        Commands::Still => run_still(&service).await,
        Commands::Glider { max_iterations } => run_glider(&service, max_iterations).await,
        Commands::Soup { dimension, cells } => run_soup(&service, dimension, cells).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
