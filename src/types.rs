//! Core value types shared by both levels of the game.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{CELLS, SIDE};

/// A side in the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of a single cell. Deliberately has no draw variant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// The player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character rendering: `X`, `O` or `.`.
    pub fn as_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Terminal result of a sub-board or of the whole game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won(Player),
    Draw,
}

impl Outcome {
    /// The winning player, or `None` for a draw.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{player}"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// A `(row, col)` location on a 3x3 grid.
///
/// Used both for cells within a sub-board and for sub-boards within the
/// super-grid. Both components are always in `0..3`, including when read
/// back through serde.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`. Callers holding unchecked
    /// input should use [`Coord::try_new`].
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < SIDE && col < SIDE, "coordinate out of range");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then(|| Self::new(row, col))
    }

    /// Converts a row-major index in `0..9` into a coordinate.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self::new(index / SIDE, index % SIDE))
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..9`.
    pub fn index(self) -> usize {
        self.row() * SIDE + self.col()
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELLS).map(|i| Self::new(i / SIDE, i % SIDE))
    }
}

/// Unchecked wire form of [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

/// A deserialized coordinate had a component outside `0..3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("coordinate ({row}, {col}) is outside the 3x3 grid")]
pub struct CoordOutOfRange {
    pub row: usize,
    pub col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = CoordOutOfRange;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::try_new(raw.row, raw.col).ok_or(CoordOutOfRange {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A move intent: which sub-board, and which cell inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub board: Coord,
    pub cell: Coord,
}

impl Move {
    pub fn new(board: Coord, cell: Coord) -> Self {
        Self { board, cell }
    }

    /// Builds a move from `(super_row, super_col, sub_row, sub_col)`.
    ///
    /// # Panics
    ///
    /// Panics if any component is not in `0..3`.
    pub fn at(super_row: usize, super_col: usize, sub_row: usize, sub_col: usize) -> Self {
        Self::new(Coord::new(super_row, super_col), Coord::new(sub_row, sub_col))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board.index(), self.cell.index())
    }
}

/// Reasons a move intent is rejected. The game state is never modified
/// when one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum IllegalMove {
    #[error("illegal move: game is already finished")]
    GameFinished,
    #[error("illegal move: must play in the forced sub-board")]
    WrongBoard,
    #[error("illegal move: sub-board is already finished")]
    BoardFinished,
    #[error("illegal move: cell is already occupied")]
    CellOccupied,
}
