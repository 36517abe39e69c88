//! Hex board representation.
//!
//! The board is a flat row-major array of cell colors plus its size. Cells are
//! handed out as [`Cell`] values; nothing outside the board holds a reference
//! into its storage. Cloning a board is a full O(N²) copy of the color array.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_SIZE, HEX_OFFSETS, MAX_SIZE, MIN_SIZE};

/// State of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Empty,
    /// Connects row 0 to row N-1.
    A,
    /// Connects column 0 to column N-1.
    B,
}

impl Color {
    /// The other player, or `Empty` for `Empty`.
    pub fn opponent(self) -> Color {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
            Color::Empty => Color::Empty,
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::A => 'A',
            Color::B => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A `(row, col)` position. Ordering is row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected `row,col`, got {0:?}")]
pub struct ParseCoordError(pub String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Coord::new(row, col))
    }
}

/// A cell as seen from outside the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub color: Color,
}

/// Reason a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{coord} is outside the {size}x{size} board")]
    OutOfRange { coord: Coord, size: usize },
    #[error("{0} is already occupied")]
    Occupied(Coord),
    #[error("cannot place an empty stone")]
    EmptyColor,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size {0} is outside {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(usize),
}

/// An N x N hex board.
#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Color>,
    stones: usize,
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
            stones: self.stones,
        }
    }

    /// Restore from a snapshot, reusing this board's allocation.
    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        self.cells.clone_from(&source.cells);
        self.stones = source.stones;
    }
}

impl Board {
    /// Create an empty board, rejecting sizes outside `MIN_SIZE..=MAX_SIZE`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Color::Empty; size * size],
            stones: 0,
        })
    }

    /// Create an empty board, falling back to `DEFAULT_SIZE` on a bad size.
    pub fn new_or_default(size: usize) -> Self {
        Self::new(size).unwrap_or_else(|err| {
            log::warn!("{err}, using {DEFAULT_SIZE}");
            Self {
                size: DEFAULT_SIZE,
                cells: vec![Color::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
                stones: 0,
            }
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    #[inline]
    fn idx(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// Index into the flat cell array, or `None` if out of range.
    #[inline]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| self.idx(coord))
    }

    /// Color at `coord`. Out-of-range coordinates read as `Empty`.
    pub fn color_at(&self, coord: Coord) -> Color {
        self.index_of(coord).map_or(Color::Empty, |i| self.cells[i])
    }

    /// True if `coord` is on the board and unoccupied.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some_and(|i| self.cells[i] == Color::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Number of occupied cells.
    pub fn stones(&self) -> usize {
        self.stones
    }

    /// The in-range neighbors of `coord` under hex adjacency.
    ///
    /// Interior cells have 6 neighbors, edge cells 4, corners 2 or 3.
    /// An out-of-range `coord` has none.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let valid = self.contains(coord);
        HEX_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            if !valid {
                return None;
            }
            let row = coord.row.checked_add_signed(dr)?;
            let col = coord.col.checked_add_signed(dc)?;
            let n = Coord::new(row, col);
            self.contains(n).then_some(n)
        })
    }

    /// Place `color` at `coord`, reporting why it was refused.
    pub fn try_move(&mut self, color: Color, coord: Coord) -> Result<(), MoveError> {
        if color == Color::Empty {
            return Err(MoveError::EmptyColor);
        }
        let i = self.index_of(coord).ok_or(MoveError::OutOfRange {
            coord,
            size: self.size,
        })?;
        if self.cells[i] != Color::Empty {
            return Err(MoveError::Occupied(coord));
        }
        self.cells[i] = color;
        self.stones += 1;
        Ok(())
    }

    /// Place `color` at `coord`. Returns false and leaves the board untouched
    /// if the cell is out of range or occupied.
    pub fn apply_move(&mut self, color: Color, coord: Coord) -> bool {
        self.try_move(color, coord).is_ok()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(i, &color)| Cell {
            coord: Coord::new(i / self.size, i % self.size),
            color,
        })
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|cell| cell.color == Color::Empty)
            .map(|cell| cell.coord)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column header, then each row shifted right by its index.
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:<2}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:width$}{row:>2} ", "", width = row)?;
            for col in 0..self.size {
                write!(f, "{} ", self.color_at(Coord::new(row, col)))?;
            }
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_size() {
        assert_eq!(Board::new(2), Err(BoardError::InvalidSize(2)));
        assert_eq!(Board::new(12), Err(BoardError::InvalidSize(12)));
        assert!(Board::new(MIN_SIZE).is_ok());
        assert!(Board::new(MAX_SIZE).is_ok());
    }

    #[test]
    fn test_invalid_size_message() {
        let err = Board::new(12).unwrap_err();
        assert_eq!(err.to_string(), "board size 12 is outside 3..=11");
    }

    #[test]
    fn test_new_or_default_falls_back() {
        assert_eq!(Board::new_or_default(0).size(), DEFAULT_SIZE);
        assert_eq!(Board::new_or_default(42).size(), DEFAULT_SIZE);
        assert_eq!(Board::new_or_default(9).size(), 9);
    }

    #[test]
    fn test_apply_move() {
        let mut board = Board::new(3).unwrap();
        let c = Coord::new(1, 2);
        assert!(board.is_empty(c));
        assert!(board.apply_move(Color::A, c));
        assert_eq!(board.color_at(c), Color::A);
        assert_eq!(board.stones(), 1);

        // Occupied
        assert!(!board.apply_move(Color::B, c));
        assert_eq!(board.color_at(c), Color::A);
        assert_eq!(board.stones(), 1);
    }

    #[test]
    fn test_try_move_errors() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.try_move(Color::A, Coord::new(3, 0)),
            Err(MoveError::OutOfRange {
                coord: Coord::new(3, 0),
                size: 3
            })
        );
        assert_eq!(
            board.try_move(Color::Empty, Coord::new(0, 0)),
            Err(MoveError::EmptyColor)
        );
        board.try_move(Color::B, Coord::new(0, 0)).unwrap();
        assert_eq!(
            board.try_move(Color::A, Coord::new(0, 0)),
            Err(MoveError::Occupied(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_out_of_range_reads() {
        let board = Board::new(4).unwrap();
        let far = Coord::new(10, 10);
        assert_eq!(board.color_at(far), Color::Empty);
        assert!(!board.is_empty(far));
        assert_eq!(board.neighbors(far).count(), 0);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(3).unwrap();
        let coords: Vec<Coord> = board.empty_cells().collect();
        assert_eq!(coords.len(), 9);
        for (i, c) in coords.into_iter().enumerate() {
            assert!(!board.is_full());
            let color = if i % 2 == 0 { Color::A } else { Color::B };
            assert!(board.apply_move(color, c));
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(5).unwrap();
        board.apply_move(Color::A, Coord::new(2, 2));
        let mut copy = board.clone();
        copy.apply_move(Color::B, Coord::new(0, 0));
        assert_eq!(board.color_at(Coord::new(0, 0)), Color::Empty);
        assert_eq!(copy.color_at(Coord::new(2, 2)), Color::A);
        assert_eq!(board.stones(), 1);
        assert_eq!(copy.stones(), 2);
    }

    #[test]
    fn test_neighbors_interior() {
        let board = Board::new(5).unwrap();
        let mut n: Vec<Coord> = board.neighbors(Coord::new(2, 2)).collect();
        n.sort();
        assert_eq!(
            n,
            vec![
                Coord::new(1, 2),
                Coord::new(1, 3),
                Coord::new(2, 1),
                Coord::new(2, 3),
                Coord::new(3, 1),
                Coord::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!("2,3".parse::<Coord>(), Ok(Coord::new(2, 3)));
        assert_eq!(" 0 , 10 ".parse::<Coord>(), Ok(Coord::new(0, 10)));
        assert!("2 3".parse::<Coord>().is_err());
        assert!("a,b".parse::<Coord>().is_err());
        assert!("-1,0".parse::<Coord>().is_err());
    }

    #[test]
    fn test_coord_order_is_row_major() {
        assert!(Coord::new(0, 5) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(Color::A, Coord::new(0, 0));
        board.apply_move(Color::B, Coord::new(2, 1));
        let s = board.to_string();
        assert!(s.contains(" 0 A . . 0"));
        assert!(s.contains("   2 . B . 2"));
    }
}
