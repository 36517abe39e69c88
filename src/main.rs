//! Hex-MC: play Hex in the terminal against a Monte Carlo engine.
//!
//! ## Usage
//!
//! - `hex-mc` - Show a demo
//! - `hex-mc play --mode hc` - Human (A) against the computer (B)
//! - `hex-mc demo --size 9` - Let the engine pick an opening move

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use hex_mc::constants::DEFAULT_SIZE;
use hex_mc::search::{SearchConfig, SearchEngine, dump_estimates, rank_estimates};
use hex_mc::session::{GameSession, Seat};
use hex_mc::{Color, new_board};

/// Hex-MC: a Hex engine driven by Monte Carlo playouts
#[derive(Parser)]
#[command(name = "hex-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone)]
struct EngineArgs {
    /// Board size (3-11); out-of-range values fall back to the default
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Parallel playout batches per candidate move
    #[arg(long)]
    workers: Option<usize>,
    /// Playouts per batch (default shrinks with board size)
    #[arg(long)]
    playouts: Option<usize>,
    /// Seed for reproducible engine moves
    #[arg(long)]
    seed: Option<u64>,
}

impl EngineArgs {
    fn config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            workers: self.workers.unwrap_or(defaults.workers),
            playouts: self.playouts,
            seed: self.seed,
        }
    }
}

/// Who sits in each seat: first letter for A, second for B.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// Human against human
    Hh,
    /// Human (A) against computer (B)
    Hc,
    /// Computer (A) against human (B)
    Ch,
    /// Computer against computer
    Cc,
}

impl Mode {
    fn seats(self) -> (Seat, Seat) {
        match self {
            Mode::Hh => (Seat::Human, Seat::Human),
            Mode::Hc => (Seat::Human, Seat::Computer),
            Mode::Ch => (Seat::Computer, Seat::Human),
            Mode::Cc => (Seat::Computer, Seat::Computer),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the terminal
    Play {
        #[command(flatten)]
        engine: EngineArgs,
        /// Seat assignment
        #[arg(long, value_enum, default_value_t = Mode::Hc)]
        mode: Mode,
    },
    /// Run a simple demo of the engine
    Demo {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { engine, mode }) => {
            let board = new_board(engine.size);
            let search = SearchEngine::new(engine.config()).context("starting search engine")?;
            let (seat_a, seat_b) = mode.seats();
            let mut session = GameSession::new(board, search, seat_a, seat_b);
            session
                .run(io::stdin().lock(), io::stdout())
                .context("game session failed")?;
        }
        Some(Commands::Demo { engine }) => run_demo(&engine)?,
        None => run_demo(&EngineArgs {
            size: DEFAULT_SIZE,
            workers: None,
            playouts: Some(30),
            seed: None,
        })?,
    }
    Ok(())
}

fn run_demo(args: &EngineArgs) -> anyhow::Result<()> {
    println!("Hex-MC: Monte Carlo Hex engine\n");

    let mut board = new_board(args.size);
    let engine = SearchEngine::new(args.config()).context("starting search engine")?;
    println!(
        "Scoring {} cells with {} x {} playouts each...",
        board.size() * board.size(),
        engine.config().workers,
        engine.config().playouts_for(board.size())
    );

    let mut estimates = engine.evaluate(&board, Color::A)?;
    dump_estimates(&estimates);
    rank_estimates(&mut estimates);
    let best = estimates.first().context("board has no empty cell")?;
    board.apply_move(Color::A, best.coord);

    println!("{board}");
    println!("Best opening for A: {} ({:.1}%)", best.coord, best.win_rate * 100.0);
    Ok(())
}
