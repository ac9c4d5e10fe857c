//! Random playouts (uniformly random legal games).
//!
//! A playout repeatedly picks one of the current legal moves at random until
//! the game ends. It does not evaluate positions; it only drives the rules
//! engine for demos and invariant checks.

use fastrand::Rng;
use tracing::debug;

use crate::constants::MAX_GAME_LEN;
use crate::game::MetaGame;
use crate::types::{Move, Outcome};

/// Summary of a finished playout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayoutResult {
    pub outcome: Outcome,
    /// Moves applied by this playout.
    pub moves: usize,
}

/// Seeded random move driver.
pub struct Playout {
    rng: Rng,
}

impl Playout {
    /// Create a driver whose move sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Pick a uniformly random legal move, or `None` if the game is over.
    pub fn choose(&mut self, game: &MetaGame) -> Option<Move> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }

    /// Play random legal moves until the game is decided.
    ///
    /// Every move writes a fresh cell, so this finishes within
    /// [`MAX_GAME_LEN`] moves.
    pub fn play_out(&mut self, game: &mut MetaGame) -> PlayoutResult {
        self.play_out_with(game, |_, _| {})
    }

    /// Like [`Playout::play_out`], calling `observe` after every move.
    pub fn play_out_with<F>(&mut self, game: &mut MetaGame, mut observe: F) -> PlayoutResult
    where
        F: FnMut(&MetaGame, Move),
    {
        let mut moves = 0;
        while let Some(mv) = self.choose(game) {
            // Moves come from legal_moves(), so they cannot be rejected.
            if let Err(err) = game.place_move(mv) {
                unreachable!("generated move {mv} was rejected: {err}");
            }
            moves += 1;
            debug_assert!(moves <= MAX_GAME_LEN);
            observe(game, mv);
        }

        let outcome = game.outcome().unwrap_or(Outcome::Draw);
        debug!(%outcome, moves, "playout finished");
        PlayoutResult { outcome, moves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playout_finishes_game() {
        let mut game = MetaGame::new();
        let result = Playout::new(7).play_out(&mut game);
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(result.outcome));
        assert_eq!(result.moves, game.moves_played());
        assert!(result.moves <= MAX_GAME_LEN);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = MetaGame::new();
        let mut b = MetaGame::new();
        Playout::new(42).play_out(&mut a);
        Playout::new(42).play_out(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_on_finished_game() {
        let mut game = MetaGame::new();
        let mut playout = Playout::new(3);
        playout.play_out(&mut game);
        assert_eq!(playout.choose(&game), None);
    }
}
