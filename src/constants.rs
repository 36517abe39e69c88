//! Constants for board dimensions and search parameters.
//!
//! The board is an N x N rhombus of hexagonal cells. Player A owns the two
//! row borders (row 0 and row N-1), player B owns the two column borders.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board size.
pub const MIN_SIZE: usize = 3;

/// Largest playable board size.
pub const MAX_SIZE: usize = 11;

/// Size used when the requested one is out of range.
pub const DEFAULT_SIZE: usize = 7;

/// Offsets `(d_row, d_col)` to the six neighbors of a cell.
///
/// These are all offsets in {-1, 0, 1}^2 except (0,0), (-1,-1) and (1,1).
pub const HEX_OFFSETS: [(isize, isize); 6] = [
    (-1, 0), // up
    (1, 0),  // down
    (0, -1), // left
    (0, 1),  // right
    (-1, 1), // up-right
    (1, -1), // down-left
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Playouts per worker per candidate on small boards.
pub const BASE_PLAYOUTS: usize = 150;

/// Largest board size that still runs the full playout budget.
pub const PLAYOUT_SIZE_THRESHOLD: usize = 6;

/// Playouts removed for every size step above the threshold.
pub const PLAYOUT_SIZE_STEP: usize = 10;

/// Default number of parallel playout batches per candidate.
pub const N_WORKERS: usize = 10;
