//! Line-oriented game session.
//!
//! Drives one game over any reader/writer pair: it prints the board, reads a
//! move per line for human seats, asks the [`SearchEngine`] for computer seats
//! and announces the winner. Player A always moves first.
//!
//! ## Commands
//!
//! - `<row>,<col>` - Play the side to move at that cell
//! - `genmove` - Let the engine play the side to move
//! - `show` - Print the board
//! - `help` - List commands
//! - `quit` - Leave the game
//!
//! ## Example
//!
//! ```ignore
//! use hex_mc::session::{GameSession, Seat};
//! let mut session = GameSession::new(board, engine, Seat::Human, Seat::Computer);
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, Coord};
use crate::path::has_connection;
use crate::search::{SearchEngine, SearchError};

const HELP: &str = "commands: <row>,<col> | genmove | show | help | quit";

/// Who plays a color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

/// State of one game.
pub struct GameSession {
    board: Board,
    engine: SearchEngine,
    seat_a: Seat,
    seat_b: Seat,
    to_move: Color,
    winner: Option<Color>,
}

impl GameSession {
    pub fn new(board: Board, engine: SearchEngine, seat_a: Seat, seat_b: Seat) -> Self {
        Self {
            board,
            engine,
            seat_a,
            seat_b,
            to_move: Color::A,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    fn seat(&self, color: Color) -> Seat {
        if color == Color::B {
            self.seat_b
        } else {
            self.seat_a
        }
    }

    /// True when the side to move is played by the engine.
    pub fn computer_to_move(&self) -> bool {
        self.winner.is_none() && self.seat(self.to_move) == Seat::Computer
    }

    /// Place a stone for the side to move, then check for a win.
    fn place(&mut self, coord: Coord) -> (bool, String) {
        let color = self.to_move;
        if let Err(err) = self.board.try_move(color, coord) {
            return (false, format!("Invalid move: {err}"));
        }
        if has_connection(&self.board, color) {
            self.winner = Some(color);
            return (true, format!("{color} plays {coord}\nPlayer {color} has won!"));
        }
        self.to_move = color.opponent();
        (true, format!("{color} plays {coord}"))
    }

    /// Ask the engine for a move and play it.
    pub fn play_computer(&mut self) -> Result<(bool, String), SearchError> {
        let coord = self.engine.suggest_move(&self.board, self.to_move)?;
        Ok(self.place(coord))
    }

    /// Execute one input line and return (success, response).
    pub fn execute(&mut self, line: &str) -> (bool, String) {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => (true, String::new()),
            "help" => (true, HELP.to_string()),
            "show" => (true, self.board.to_string()),
            "quit" => (true, String::new()),
            _ if self.winner.is_some() => (false, "game is over".to_string()),
            "genmove" => match self.play_computer() {
                Ok(result) => result,
                Err(err) => (false, err.to_string()),
            },
            _ => match line.parse::<Coord>() {
                Ok(coord) => self.place(coord),
                Err(err) => (false, format!("Invalid move: {err}")),
            },
        }
    }

    /// Play the game to the end, reading human moves from `input`.
    ///
    /// Returns early on `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        let mut lines = input.lines();
        writeln!(output, "{}", self.board)?;

        while self.winner.is_none() {
            if self.computer_to_move() {
                let (_, message) = self
                    .play_computer()
                    .map_err(|e| io::Error::other(e.to_string()))?;
                writeln!(output, "{}\n{message}", self.board)?;
                continue;
            }

            writeln!(output, "Player {} move (row,col):", self.to_move)?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if line.trim().eq_ignore_ascii_case("quit") {
                break;
            }
            let (success, message) = self.execute(&line);
            if success && !message.is_empty() && line.trim().parse::<Coord>().is_ok() {
                writeln!(output, "{}", self.board)?;
            }
            if !message.is_empty() {
                writeln!(output, "{message}")?;
            }
        }
        Ok(())
    }
}
