//! Determinized MCTS: sample, search, aggregate.
//!
//! For each of N determinizations the engine builds a fresh, independent
//! tree rooted at the sampled state and runs the standard UCT loop on it.
//! Root-level visit counts are then accumulated per `Move` across all
//! trees and the move with the highest aggregate wins. Trees are never
//! reused across determinizations.

use rustc_hash::FxHashMap;

use crate::core::GameRng;
use crate::game::{GameState, Move};

use super::determinize::determinize;
use super::tree::SearchTree;
use super::{uct_iteration, Strategy};

/// Sample-then-search over N determinizations.
pub struct DeterminizedMcts {
    determinizations: u32,
    iterations: u32,
    rng: GameRng,
}

impl DeterminizedMcts {
    /// Create an engine running `iterations` on each of `determinizations`
    /// sampled states per move choice. Both must be at least one.
    #[must_use]
    pub fn new(determinizations: u32, iterations: u32, seed: u64) -> Self {
        debug_assert!(
            determinizations > 0 && iterations > 0,
            "search requires at least one determinization and iteration"
        );
        Self {
            determinizations,
            iterations,
            rng: GameRng::new(seed),
        }
    }

    /// Aggregate root visit counts per move across every determinization.
    pub fn move_visits(&mut self, state: &GameState) -> Vec<(Move, u32)> {
        let mut tally: FxHashMap<Move, u32> = FxHashMap::default();

        for _ in 0..self.determinizations {
            let sampled = determinize(state, &mut self.rng);
            let mut tree = SearchTree::with_capacity(
                sampled.possible_moves().as_slice(),
                self.iterations as usize + 1,
            );

            for _ in 0..self.iterations {
                uct_iteration(&mut tree, &sampled, sampled.active_player, &mut self.rng);
            }

            for child in tree.children(tree.root()) {
                let node = tree.get(child);
                *tally.entry(node.mv).or_insert(0) += node.visits;
            }
        }

        tally.into_iter().collect()
    }

    /// The move with the highest aggregate visit count; ties break toward
    /// the smallest move in the total order, independent of map iteration.
    pub fn choose_move(&mut self, state: &GameState) -> Move {
        self.move_visits(state)
            .into_iter()
            .max_by(|(move_a, visits_a), (move_b, visits_b)| {
                visits_a.cmp(visits_b).then_with(|| move_b.cmp(move_a))
            })
            .map(|(mv, _)| mv)
            .expect("at least one iteration must run before recommending")
    }
}

impl Strategy for DeterminizedMcts {
    fn choose_move(&mut self, state: &GameState) -> Move {
        DeterminizedMcts::choose_move(self, state)
    }
}
