//! Monte Carlo move selection.
//!
//! For every empty cell the engine places the mover's stone on a copy of the
//! board and estimates the mover's win probability with random playouts. The
//! playouts for one candidate are split into batches that run in parallel on
//! a rayon pool. Each batch owns its board copy, its random generator and its
//! result slot; the batch win-rates are averaged once all of them have joined.
//! Candidates are scored one after another.
//!
//! The board passed in is never modified. The caller applies the chosen move.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::board::{Board, Color, Coord};
use crate::constants::N_WORKERS;
use crate::playout::{playout_limit, simulate};

/// Search parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Parallel playout batches per candidate
    pub workers: usize,
    /// Playouts per batch; `None` uses [`playout_limit`] for the board size
    pub playouts: Option<usize>,
    /// Seed for reproducible searches; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: N_WORKERS,
            playouts: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Playouts each batch runs on a board of `size`.
    pub fn playouts_for(&self, size: usize) -> usize {
        self.playouts.unwrap_or_else(|| playout_limit(size))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no empty cell left to play")]
    BoardFull,
    #[error("cannot search a move for the empty color")]
    EmptyColor,
    #[error("failed to start search workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Estimated win probability for playing at `coord`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Estimate {
    pub coord: Coord,
    pub win_rate: f64,
}

/// Sort estimates best first.
///
/// Equal win-rates are ordered row-major by coordinate, so the earliest cell
/// in enumeration order wins a tie.
pub fn rank_estimates(estimates: &mut [Estimate]) {
    estimates.sort_by(|a, b| {
        b.win_rate
            .total_cmp(&a.win_rate)
            .then_with(|| a.coord.cmp(&b.coord))
    });
}

/// Move selection engine owning its worker pool.
pub struct SearchEngine {
    config: SearchConfig,
    pool: ThreadPool,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers.max(1))
            .thread_name(|i| format!("playout-{i}"))
            .build()?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Generator that hands out one seed per playout batch.
    fn master_rng(&self) -> fastrand::Rng {
        match self.config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    /// Score every empty cell for `color`, in row-major order.
    pub fn evaluate(&self, board: &Board, color: Color) -> Result<Vec<Estimate>, SearchError> {
        if color == Color::Empty {
            return Err(SearchError::EmptyColor);
        }
        let limit = self.config.playouts_for(board.size());
        let workers = self.config.workers.max(1);
        let mut master = self.master_rng();

        let candidates: Vec<Coord> = board.empty_cells().collect();
        let mut estimates = Vec::with_capacity(candidates.len());

        for coord in candidates {
            let mut candidate = board.clone();
            if !candidate.apply_move(color, coord) {
                continue;
            }
            // Seeds are drawn before dispatch so the result does not depend
            // on which thread runs which batch.
            let seeds: Vec<u64> = (0..workers).map(|_| master.u64(..)).collect();
            let win_rate = self.score_candidate(&candidate, color, limit, &seeds);
            log::debug!("candidate {coord}: win rate {win_rate:.3}");
            estimates.push(Estimate { coord, win_rate });
        }

        Ok(estimates)
    }

    /// Average win-rate of `color` over one playout batch per seed.
    fn score_candidate(
        &self,
        candidate: &Board,
        color: Color,
        limit: usize,
        seeds: &[u64],
    ) -> f64 {
        let rates: Vec<f64> = self.pool.install(|| {
            seeds
                .par_iter()
                .map(|&seed| {
                    let mut rng = fastrand::Rng::with_seed(seed);
                    simulate(candidate, color, color.opponent(), limit, &mut rng)
                })
                .collect()
        });

        if rates.is_empty() {
            return 0.0;
        }
        rates.iter().sum::<f64>() / rates.len() as f64
    }

    /// Pick the best move for `color`.
    ///
    /// Returns [`SearchError::BoardFull`] when there is nothing to play; check
    /// [`Board::is_full`] first.
    pub fn suggest_move(&self, board: &Board, color: Color) -> Result<Coord, SearchError> {
        let mut estimates = self.evaluate(board, color)?;
        rank_estimates(&mut estimates);
        let best = estimates.first().ok_or(SearchError::BoardFull)?;
        log::info!(
            "{color} plays {} (win rate {:.3}, {} candidates)",
            best.coord,
            best.win_rate,
            estimates.len()
        );
        Ok(best.coord)
    }
}

/// Log every estimate at debug level, best first.
pub fn dump_estimates(estimates: &[Estimate]) {
    let mut ranked = estimates.to_vec();
    rank_estimates(&mut ranked);
    for e in &ranked {
        log::debug!("move {} wr={:.3}", e.coord, e.win_rate);
    }
}
