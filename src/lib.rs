//! Hex-MC: a Hex engine driven by Monte Carlo playouts.
//!
//! Two players alternately color cells of an N x N rhombus. Player A wins by
//! linking row 0 to row N-1, player B by linking column 0 to column N-1. The
//! engine scores every empty cell by random playouts and picks the best one.
//!
//! ## Modules
//!
//! - [`constants`] - Size range and search parameters
//! - [`board`] - Cells, coordinates and the hex adjacency model
//! - [`path`] - Border-to-border win detection
//! - [`playout`] - Random game completion for position evaluation
//! - [`search`] - Parallel Monte Carlo move selection
//! - [`session`] - Text game loop built on the four operations below
//!
//! ## Example
//!
//! ```
//! use hex_mc::{apply_move, has_connection, new_board, Color, Coord};
//! use hex_mc::search::{SearchConfig, SearchEngine};
//!
//! let mut board = new_board(5);
//! assert!(apply_move(&mut board, Color::A, Coord::new(2, 2)));
//!
//! let engine = SearchEngine::new(SearchConfig {
//!     workers: 2,
//!     playouts: Some(20),
//!     seed: Some(7),
//! })
//! .unwrap();
//! let reply = engine.suggest_move(&board, Color::B).unwrap();
//! assert!(apply_move(&mut board, Color::B, reply));
//! assert!(!has_connection(&board, Color::B));
//! ```

pub mod board;
pub mod constants;
pub mod path;
pub mod playout;
pub mod search;
pub mod session;

pub use board::{Board, Cell, Color, Coord};
pub use path::has_connection;
pub use search::{SearchConfig, SearchEngine, SearchError};

/// Create an empty board, using the default size if `size` is out of range.
pub fn new_board(size: usize) -> Board {
    Board::new_or_default(size)
}

/// Place `color` at `coord`; false if the cell is out of range or taken.
pub fn apply_move(board: &mut Board, color: Color, coord: Coord) -> bool {
    board.apply_move(color, coord)
}

/// Best move for `color_to_move` using the default search configuration.
///
/// Builds a fresh worker pool on every call; keep a [`SearchEngine`] around
/// when asking for many moves.
pub fn suggest_move(board: &Board, color_to_move: Color) -> Result<Coord, SearchError> {
    SearchEngine::new(SearchConfig::default())?.suggest_move(board, color_to_move)
}
