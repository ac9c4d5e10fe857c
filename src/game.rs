//! The meta-game: nine sub-boards, turn order and the forced-board rule.
//!
//! This module owns the legality gate for the whole game:
//! - Rejecting moves after the game has finished
//! - Enforcing the forced sub-board chosen by the previous move
//! - Propagating sub-board outcomes into the super-grid
//! - Selecting the next forced sub-board and flipping the turn
//!
//! Every move is applied to completion before `place_move` returns, and a
//! rejected move leaves the game exactly as it was.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::board::SubBoard;
use crate::constants::{CELLS, OPENING_BOARD, SIDE};
use crate::lines::first_winner;
use crate::snapshot::Snapshot;
use crate::types::{Coord, IllegalMove, Mark, Move, Outcome, Player};

/// Full game state.
///
/// A game is either in progress, with an optional forced sub-board, or
/// finished with an [`Outcome`]. The only way out of the finished state is
/// [`MetaGame::reset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaGame {
    /// Sub-boards in row-major order
    boards: [SubBoard; CELLS],
    /// Side to move
    current_player: Player,
    /// Sub-board the next move must target (`None` = any open sub-board)
    forced_board: Option<Coord>,
    /// Result of the whole game, once decided
    outcome: Option<Outcome>,
    /// Number of moves accepted since the last reset
    moves_played: usize,
}

impl Default for MetaGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaGame {
    /// Creates a game in the opening position: X to move in the center board.
    pub fn new() -> Self {
        Self {
            boards: std::array::from_fn(|_| SubBoard::new()),
            current_player: Player::X,
            forced_board: Some(OPENING_BOARD),
            outcome: None,
            moves_played: 0,
        }
    }

    /// Returns the game to the opening position.
    #[instrument(skip(self), fields(moves_played = self.moves_played))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The sub-board the next move must target, or `None` when any open
    /// sub-board may be chosen.
    ///
    /// Only meaningful while the game is in progress. The move that finishes
    /// the game leaves this untouched, so afterwards it may name a decided
    /// board; use [`MetaGame::playable_boards`] to find where play is allowed.
    pub fn forced_board(&self) -> Option<Coord> {
        self.forced_board
    }

    /// Result of the whole game, or `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn board(&self, board: Coord) -> &SubBoard {
        &self.boards[board.index()]
    }

    pub fn cell(&self, mv: Move) -> Mark {
        self.board(mv.board).get(mv.cell)
    }

    /// Sub-boards in row-major order paired with their coordinates.
    pub fn boards(&self) -> impl Iterator<Item = (Coord, &SubBoard)> {
        Coord::all().zip(self.boards.iter())
    }

    /// Checks a move against every rule without applying it.
    ///
    /// Checks run in a fixed order, and the first failure is reported:
    /// 1. [`IllegalMove::GameFinished`] if the game is over
    /// 2. [`IllegalMove::WrongBoard`] if another sub-board is forced and still open
    /// 3. [`IllegalMove::CellOccupied`] if the cell already holds a mark
    /// 4. [`IllegalMove::BoardFinished`] if the target sub-board is decided
    pub fn check_move(&self, mv: Move) -> Result<(), IllegalMove> {
        if self.outcome.is_some() {
            return Err(IllegalMove::GameFinished);
        }
        if let Some(forced) = self.forced_board {
            // A decided forced board opens play to every open board.
            if forced != mv.board && !self.board(forced).is_finished() {
                return Err(IllegalMove::WrongBoard);
            }
        }
        self.board(mv.board).check(mv.cell)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Places the current player's mark and advances the game.
    ///
    /// On success the target sub-board and the game outcome are re-evaluated.
    /// If the game is still running, the next forced board is the one at the
    /// position of the cell just played (or none, if that board is decided)
    /// and the turn passes to the opponent. A finished game keeps its last
    /// forced board and player.
    ///
    /// # Errors
    /// See [`MetaGame::check_move`]. The game is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if let Err(err) = self.check_move(mv) {
            debug!(%err, "move rejected");
            return Err(err);
        }

        let player = self.current_player;
        let board = &mut self.boards[mv.board.index()];
        board.place(mv.cell, player)?;
        self.moves_played += 1;

        // A board can only be decided by the move that just landed on it.
        if let Some(board_outcome) = board.outcome() {
            debug!(board = %mv.board, outcome = %board_outcome, "sub-board decided");
        }

        self.outcome = self.evaluate();
        if let Some(outcome) = self.outcome {
            info!(%outcome, moves = self.moves_played, "game finished");
            return Ok(());
        }

        let next = mv.cell;
        self.forced_board = if self.board(next).is_finished() {
            debug_assert!(
                self.boards.iter().any(|b| !b.is_finished()),
                "open play with every sub-board decided must already be a draw"
            );
            None
        } else {
            Some(next)
        };
        self.current_player = player.opponent();
        debug!(forced = ?self.forced_board, "move accepted");
        Ok(())
    }

    /// Winner over the super-grid, treating each decided sub-board as a cell.
    /// Drawn sub-boards never count toward a line.
    fn evaluate(&self) -> Option<Outcome> {
        let winner = first_winner(|c| self.board(c).outcome().and_then(Outcome::winner));
        if let Some(player) = winner {
            return Some(Outcome::Won(player));
        }
        self.boards
            .iter()
            .all(SubBoard::is_finished)
            .then_some(Outcome::Draw)
    }

    /// Sub-boards a move may target right now, in row-major order.
    pub fn playable_boards(&self) -> Vec<Coord> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        match self.forced_board {
            Some(forced) if !self.board(forced).is_finished() => vec![forced],
            _ => self
                .boards()
                .filter(|(_, b)| !b.is_finished())
                .map(|(c, _)| c)
                .collect(),
        }
    }

    /// Every legal move, ordered by board then cell (both row-major).
    ///
    /// Empty exactly when the game is finished.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.playable_boards()
            .into_iter()
            .flat_map(|b| self.board(b).empty_cells().map(move |c| Move::new(b, c)))
            .collect()
    }

    /// Captures a read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

impl fmt::Display for MetaGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for board_row in 0..SIDE {
            if board_row > 0 {
                writeln!(f, "------+-------+------")?;
            }
            for cell_row in 0..SIDE {
                let segments: Vec<String> = (0..SIDE)
                    .map(|board_col| {
                        let board = self.board(Coord::new(board_row, board_col));
                        (0..SIDE)
                            .map(|cell_col| {
                                board.get(Coord::new(cell_row, cell_col)).as_char().to_string()
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect();
                writeln!(f, "{}", segments.join(" | "))?;
            }
        }
        Ok(())
    }
}
