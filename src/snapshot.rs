//! Read-only view of a game for renderers.
//!
//! A [`Snapshot`] carries everything a view layer needs to draw the game,
//! including the status line and which boards accept clicks, so the view
//! never re-derives rules on its own.

use serde::{Deserialize, Serialize};

use crate::constants::SIDE;
use crate::game::MetaGame;
use crate::types::{Coord, Mark, Move, Outcome, Player};

type Grid<T> = [[T; SIDE]; SIDE];

/// Point-in-time copy of a [`MetaGame`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Marks indexed `[board_row][board_col][cell_row][cell_col]`.
    pub cells: Grid<Grid<Mark>>,
    pub board_outcomes: Grid<Option<Outcome>>,
    pub current_player: Player,
    /// Forced board as last set during play. Stale once `outcome` is set;
    /// renderers should read `active_boards` instead.
    pub forced_board: Option<Coord>,
    pub outcome: Option<Outcome>,
    pub moves_played: usize,
    /// Boards the next move may target. All false once the game is over.
    pub active_boards: Grid<bool>,
    pub status: String,
}

impl Snapshot {
    pub fn capture(game: &MetaGame) -> Self {
        let mut active_boards = [[false; SIDE]; SIDE];
        for board in game.playable_boards() {
            active_boards[board.row()][board.col()] = true;
        }

        Self {
            cells: std::array::from_fn(|br| {
                std::array::from_fn(|bc| game.board(Coord::new(br, bc)).rows())
            }),
            board_outcomes: std::array::from_fn(|br| {
                std::array::from_fn(|bc| game.board(Coord::new(br, bc)).outcome())
            }),
            current_player: game.current_player(),
            forced_board: game.forced_board(),
            outcome: game.outcome(),
            moves_played: game.moves_played(),
            active_boards,
            status: status_text(game.outcome(), game.current_player()),
        }
    }

    pub fn mark(&self, mv: Move) -> Mark {
        self.cells[mv.board.row()][mv.board.col()][mv.cell.row()][mv.cell.col()]
    }

    /// Whether the renderer should accept a click on this cell.
    pub fn cell_enabled(&self, mv: Move) -> bool {
        self.outcome.is_none()
            && self.active_boards[mv.board.row()][mv.board.col()]
            && self.mark(mv).is_empty()
    }
}

/// Status line shown above the board.
pub fn status_text(outcome: Option<Outcome>, current_player: Player) -> String {
    match outcome {
        Some(Outcome::Won(player)) => format!("Winner: {player}"),
        Some(Outcome::Draw) => "It's a draw!".to_string(),
        None => format!("Next player: {current_player}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let snap = MetaGame::new().snapshot();
        assert_eq!(snap.status, "Next player: X");
        assert_eq!(snap.forced_board, Some(Coord::new(1, 1)));
        assert!(snap.active_boards[1][1]);
        assert_eq!(
            snap.active_boards.iter().flatten().filter(|&&a| a).count(),
            1
        );
        assert!(snap.cell_enabled(Move::at(1, 1, 0, 0)));
        assert!(!snap.cell_enabled(Move::at(0, 0, 0, 0)));
    }

    #[test]
    fn test_snapshot_tracks_moves() {
        let mut game = MetaGame::new();
        game.place_move(Move::at(1, 1, 2, 1)).unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.mark(Move::at(1, 1, 2, 1)), Mark::X);
        assert_eq!(snap.cells[1][1][2][1], Mark::X);
        assert_eq!(snap.status, "Next player: O");
        assert_eq!(snap.moves_played, 1);
        assert!(snap.active_boards[2][1]);
        assert!(!snap.active_boards[1][1]);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(Some(Outcome::Won(Player::O)), Player::O), "Winner: O");
        assert_eq!(status_text(Some(Outcome::Draw), Player::X), "It's a draw!");
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let snap = MetaGame::new().snapshot();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["current_player"], "X");
        assert_eq!(json["forced_board"]["row"], 1);
        assert_eq!(json["status"], "Next player: X");
        let back: Snapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }
}
