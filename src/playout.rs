//! Monte Carlo playouts (random game completion).
//!
//! A playout fills every empty cell of a private board copy with alternating
//! colors in uniformly random order, then checks whether the target color
//! connected its borders. Every playout restarts from the same snapshot, so
//! each costs one O(N²) copy.
//!
//! Randomness always comes from a caller-supplied [`fastrand::Rng`], so a
//! seeded generator gives reproducible results.

use crate::board::{Board, Color, Coord};
use crate::constants::{BASE_PLAYOUTS, PLAYOUT_SIZE_STEP, PLAYOUT_SIZE_THRESHOLD};
use crate::path::has_connection;

/// Win counts from a batch of playouts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    /// Playouts in which the target color connected
    pub wins: usize,
    /// Playouts run
    pub playouts: usize,
}

impl PlayoutStats {
    /// Fraction of playouts won, 0.0 when nothing was played.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.playouts > 0 {
            self.wins as f64 / self.playouts as f64
        } else {
            0.0
        }
    }
}

/// Playouts per worker for a board of `size`.
///
/// Constant up to `PLAYOUT_SIZE_THRESHOLD`, then reduced by
/// `PLAYOUT_SIZE_STEP` for every size above it.
pub fn playout_limit(size: usize) -> usize {
    let excess = size.saturating_sub(PLAYOUT_SIZE_THRESHOLD);
    BASE_PLAYOUTS
        .saturating_sub(excess * PLAYOUT_SIZE_STEP)
        .max(1)
}

/// Fill all empty cells of `board`, alternating colors from `to_move`.
///
/// Cells are taken in a uniformly random order, which is the same as picking
/// a uniformly random empty cell at every turn.
pub fn random_fill(board: &mut Board, to_move: Color, rng: &mut fastrand::Rng) {
    let mut empties: Vec<Coord> = board.empty_cells().collect();
    rng.shuffle(&mut empties);

    let mut color = to_move;
    for coord in empties {
        let placed = board.apply_move(color, coord);
        debug_assert!(placed, "shuffled cell {coord} was not empty");
        color = color.opponent();
    }
}

/// Run up to `limit` playouts from `board` and count wins for `target`.
///
/// `to_move` is the color that plays first in each playout, i.e. the player
/// whose turn follows the position in `board`.
pub fn run_playouts(
    board: &Board,
    target: Color,
    to_move: Color,
    limit: usize,
    rng: &mut fastrand::Rng,
) -> PlayoutStats {
    let mut stats = PlayoutStats::default();
    let mut work = board.clone();

    for _ in 0..limit {
        // Restore the snapshot without reallocating.
        work.clone_from(board);
        random_fill(&mut work, to_move, rng);

        if has_connection(&work, target) {
            stats.wins += 1;
        }
        stats.playouts += 1;
    }

    stats
}

/// Estimated probability that `target` wins from `board`.
pub fn simulate(
    board: &Board,
    target: Color,
    to_move: Color,
    limit: usize,
    rng: &mut fastrand::Rng,
) -> f64 {
    run_playouts(board, target, to_move, limit, rng).win_rate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::winner;

    #[test]
    fn test_playout_limit_curve() {
        assert_eq!(playout_limit(3), 150);
        assert_eq!(playout_limit(5), 150);
        assert_eq!(playout_limit(6), 150);
        assert_eq!(playout_limit(7), 140);
        assert_eq!(playout_limit(11), 100);
        assert_eq!(playout_limit(1000), 1);
    }

    #[test]
    fn test_random_fill_fills_and_alternates() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut board = Board::new(5).unwrap();
        board.apply_move(Color::A, Coord::new(2, 2));
        random_fill(&mut board, Color::B, &mut rng);

        assert!(board.is_full());
        assert_eq!(board.color_at(Coord::new(2, 2)), Color::A);
        let a = board.cells().filter(|c| c.color == Color::A).count();
        let b = board.cells().filter(|c| c.color == Color::B).count();
        // 24 empty cells split evenly, B first.
        assert_eq!(a, 13);
        assert_eq!(b, 12);
        assert!(winner(&board).is_some());
    }

    #[test]
    fn test_playouts_leave_board_untouched() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut board = Board::new(4).unwrap();
        board.apply_move(Color::B, Coord::new(1, 1));
        let before = board.clone();
        let stats = run_playouts(&board, Color::B, Color::A, 20, &mut rng);
        assert_eq!(board, before);
        assert_eq!(stats.playouts, 20);
        assert!(stats.wins <= 20);
    }

    #[test]
    fn test_already_won_board() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut board = Board::new(3).unwrap();
        for r in 0..3 {
            board.apply_move(Color::A, Coord::new(r, 1));
        }
        assert_eq!(simulate(&board, Color::A, Color::B, 30, &mut rng), 1.0);
        assert_eq!(simulate(&board, Color::B, Color::B, 30, &mut rng), 0.0);
    }

    #[test]
    fn test_zero_limit() {
        let mut rng = fastrand::Rng::with_seed(3);
        let board = Board::new(3).unwrap();
        let stats = run_playouts(&board, Color::A, Color::A, 0, &mut rng);
        assert_eq!(stats, PlayoutStats::default());
        assert_eq!(stats.win_rate(), 0.0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut board = Board::new(6).unwrap();
        board.apply_move(Color::A, Coord::new(3, 3));
        let a = run_playouts(&board, Color::A, Color::B, 50, &mut fastrand::Rng::with_seed(99));
        let b = run_playouts(&board, Color::A, Color::B, 50, &mut fastrand::Rng::with_seed(99));
        assert_eq!(a, b);
    }
}
