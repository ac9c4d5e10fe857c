//! Ultimate-TTT: a rules engine for Ultimate Tic-Tac-Toe.
//!
//! Nine tic-tac-toe boards are arranged in a 3x3 super-grid. The cell a
//! player marks decides which sub-board the opponent must play in next,
//! and winning three sub-boards in a row wins the game.
//!
//! ## Modules
//!
//! - [`constants`] - Grid dimensions and opening rule
//! - [`types`] - Players, marks, outcomes, coordinates and move errors
//! - [`lines`] - Three-in-a-row detection shared by both grid levels
//! - [`board`] - A single sub-board
//! - [`game`] - The meta-game state machine and legality gate
//! - [`snapshot`] - Serializable read-only view for renderers
//! - [`playout`] - Seeded random legal games
//! - [`protocol`] - Text command loop for driving a game over stdin/stdout
//!
//! ## Example
//!
//! ```
//! use ultimate_ttt::game::MetaGame;
//! use ultimate_ttt::types::{Coord, IllegalMove, Move, Player};
//!
//! let mut game = MetaGame::new();
//!
//! // X opens in the center board, sending O to the top-left board.
//! game.place_move(Move::at(1, 1, 0, 0)).unwrap();
//! assert_eq!(game.forced_board(), Some(Coord::new(0, 0)));
//! assert_eq!(game.current_player(), Player::O);
//!
//! // O may not play anywhere else.
//! assert_eq!(game.place_move(Move::at(1, 1, 0, 1)), Err(IllegalMove::WrongBoard));
//!
//! println!("{}", game.snapshot().status);
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod lines;
pub mod playout;
pub mod protocol;
pub mod snapshot;
pub mod types;
