//! The seam between the tournament driver and move selection.

use crate::core::GameRng;
use crate::game::{GameState, Move};

/// Anything that can pick a move for the active player.
///
/// Implementations may mutate internal state (search trees, RNGs) but must
/// only return members of `state.possible_moves()`.
pub trait Strategy {
    /// Choose a move for the active player of `state`.
    fn choose_move(&mut self, state: &GameState) -> Move;
}

/// Uniform-random baseline.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random player with its own seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, state: &GameState) -> Move {
        let moves = state.possible_moves();
        moves[self.rng.gen_range_usize(0..moves.len())]
    }
}
