//! Perfect-information MCTS.
//!
//! Searches the true `GameState` with no determinization, hidden zones
//! included. Useful as a strength ceiling for the honest engines; it is
//! "cheating" because a real player cannot see the opponent's hand.

use crate::core::GameRng;
use crate::game::{GameState, Move};

use super::tree::SearchTree;
use super::{uct_iteration, Strategy};

/// Full-information UCT search.
pub struct CheatingMcts {
    iterations: u32,
    rng: GameRng,
    tree: SearchTree,
}

impl CheatingMcts {
    /// Create an engine running `iterations` per move choice.
    ///
    /// `iterations` must be at least one; a recommendation from an
    /// unexpanded root is a logic error.
    #[must_use]
    pub fn new(iterations: u32, seed: u64) -> Self {
        debug_assert!(iterations > 0, "search requires at least one iteration");
        Self {
            iterations,
            rng: GameRng::new(seed),
            tree: SearchTree::new(&[]),
        }
    }

    /// Run the configured number of iterations from `state` and return the
    /// most-visited root move.
    pub fn choose_move(&mut self, state: &GameState) -> Move {
        self.tree.reset(
            state.possible_moves().as_slice(),
            self.iterations as usize + 1,
        );

        for _ in 0..self.iterations {
            uct_iteration(&mut self.tree, state, state.active_player, &mut self.rng);
        }

        let best = self
            .tree
            .best_child_by_visits(self.tree.root())
            .expect("at least one iteration must run before recommending");
        self.tree.get(best).mv
    }

    /// The tree built by the most recent `choose_move` call.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

impl Strategy for CheatingMcts {
    fn choose_move(&mut self, state: &GameState) -> Move {
        CheatingMcts::choose_move(self, state)
    }
}
