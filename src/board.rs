//! A single 3x3 tic-tac-toe grid with its own win/draw detection.

use std::fmt;

use crate::constants::{CELLS, SIDE};
use crate::lines::first_winner;
use crate::types::{Coord, IllegalMove, Mark, Outcome, Player};

/// One of the nine inner boards.
///
/// The outcome is recomputed after every placement and frozen once set:
/// a finished sub-board rejects all further marks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubBoard {
    cells: [Mark; CELLS],
    outcome: Option<Outcome>,
}

impl SubBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Coord) -> Mark {
        self.cells[cell.index()]
    }

    /// Terminal result of this board, or `None` while it is still open.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&c| self.get(c).is_empty())
    }

    /// Marks as a 3x3 row-major grid.
    pub fn rows(&self) -> [[Mark; SIDE]; SIDE] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.cells[r * SIDE + c]))
    }

    /// Checks whether a mark could be placed on `cell` without placing it.
    ///
    /// # Errors
    /// - [`IllegalMove::CellOccupied`] if the cell already holds a mark
    /// - [`IllegalMove::BoardFinished`] if the board is already decided
    pub fn check(&self, cell: Coord) -> Result<(), IllegalMove> {
        if !self.get(cell).is_empty() {
            return Err(IllegalMove::CellOccupied);
        }
        if self.outcome.is_some() {
            return Err(IllegalMove::BoardFinished);
        }
        Ok(())
    }

    /// Places `player`'s mark on `cell` and re-evaluates the outcome.
    ///
    /// Fails exactly when [`SubBoard::check`] fails, leaving the board as it was.
    pub fn place(&mut self, cell: Coord, player: Player) -> Result<(), IllegalMove> {
        self.check(cell)?;
        self.cells[cell.index()] = Mark::from(player);
        self.outcome = self.evaluate();
        Ok(())
    }

    fn evaluate(&self) -> Option<Outcome> {
        if let Some(winner) = first_winner(|c| self.get(c).player()) {
            return Some(Outcome::Won(winner));
        }
        self.is_full().then_some(Outcome::Draw)
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for mark in row {
                write!(f, "{} ", mark.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
