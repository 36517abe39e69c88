//! Win detection: border-to-border connection search.
//!
//! A color wins when a chain of its stones links its starting border to its
//! ending border. Player A links row 0 to row N-1, player B links column 0 to
//! column N-1. The visited set lives only for the duration of one call.

use crate::board::{Board, Color, Coord};

/// Cells on the starting border of `color`, in order.
fn start_border(size: usize, color: Color) -> impl Iterator<Item = Coord> {
    (0..size).map(move |i| match color {
        Color::B => Coord::new(i, 0),
        _ => Coord::new(0, i),
    })
}

#[inline]
fn on_end_border(size: usize, color: Color, coord: Coord) -> bool {
    match color {
        Color::A => coord.row == size - 1,
        Color::B => coord.col == size - 1,
        Color::Empty => false,
    }
}

/// True if `color` has a chain connecting both of its borders.
///
/// Always false for `Color::Empty`. Runs in O(N²).
pub fn has_connection(board: &Board, color: Color) -> bool {
    if color == Color::Empty {
        return false;
    }
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut stack: Vec<Coord> = Vec::with_capacity(size * size);

    for seed in start_border(size, color) {
        if board.color_at(seed) != color {
            continue;
        }
        let Some(i) = board.index_of(seed) else {
            continue;
        };
        if visited[i] {
            continue;
        }
        // Mark on push so a cell is scheduled at most once.
        visited[i] = true;
        stack.push(seed);

        while let Some(cur) = stack.pop() {
            if on_end_border(size, color, cur) {
                return true;
            }
            for n in board.neighbors(cur) {
                let Some(ni) = board.index_of(n) else {
                    continue;
                };
                if !visited[ni] && board.color_at(n) == color {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
    }
    false
}

/// The color that has connected its borders, if any.
///
/// On a full board exactly one color is connected.
pub fn winner(board: &Board) -> Option<Color> {
    [Color::A, Color::B]
        .into_iter()
        .find(|&color| has_connection(board, color))
}
