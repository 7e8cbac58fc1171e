//! Single-observer information-set MCTS.
//!
//! One tree persists across all iterations while the hidden zones are
//! re-determinized every iteration; selection and expansion run against
//! the current sample but consult the shared tree. Because legal moves
//! vary with the sample, a node's untried moves are recomputed per
//! iteration as "this sample's legal moves minus existing children".
//!
//! The defining bookkeeping is **availability**: every time a parent is
//! traversed, every child whose move is legal in the current sample gets
//! its availability bumped - selected or not - and the UCT exploration
//! term uses `ln(availability)` rather than the parent's visit count.
//! Skipping the bump for unselected-but-available siblings would break the
//! convergence property this algorithm exists for.

use crate::core::GameRng;
use crate::game::{GameState, Move, Winner};

use super::determinize::determinize;
use super::tree::{NodeId, SearchTree, UntriedMoves};
use super::Strategy;

/// Information-set MCTS from the active player's observation.
pub struct SoIsMcts {
    iterations: u32,
    rng: GameRng,
    tree: SearchTree,
}

impl SoIsMcts {
    /// Create an engine running `iterations` per move choice; must be at
    /// least one.
    #[must_use]
    pub fn new(iterations: u32, seed: u64) -> Self {
        debug_assert!(iterations > 0, "search requires at least one iteration");
        Self {
            iterations,
            rng: GameRng::new(seed),
            tree: SearchTree::new(&[]),
        }
    }

    /// Run the configured number of iterations from `state` (the clean,
    /// un-determinized observation) and return the most-visited root move.
    pub fn choose_move(&mut self, state: &GameState) -> Move {
        self.tree.reset(&[], self.iterations as usize + 1);
        let searcher = state.active_player;

        for _ in 0..self.iterations {
            let mut sim = determinize(state, &mut self.rng);
            let mut node = self.tree.root();

            // Selection: descend while this sample leaves nothing untried.
            while untried_moves(&self.tree, node, &sim).is_empty()
                && self.tree.has_children(node)
            {
                let next = select_available(&self.tree, node, &sim);
                bump_availability(&mut self.tree, node, &sim);
                sim.process_move(self.tree.get(next).mv);
                node = next;
            }

            // Expansion: one untried move from the current sample.
            let untried = untried_moves(&self.tree, node, &sim);
            if !untried.is_empty() {
                let mv = untried[self.rng.gen_range_usize(0..untried.len())];
                bump_availability(&mut self.tree, node, &sim);
                sim.process_move(mv);
                node = self.tree.add_child(node, mv, &[]);
                self.tree.get_mut(node).availability += 1;
            }

            sim.play_out_randomly(&mut self.rng);
            self.tree
                .backpropagate(node, sim.winner == Winner::for_player(searcher));
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

impl Strategy for SoIsMcts {
    fn choose_move(&mut self, state: &GameState) -> Move {
        SoIsMcts::choose_move(self, state)
    }
}

/// This sample's legal moves minus the moves already expanded as children.
fn untried_moves(tree: &SearchTree, node: NodeId, state: &GameState) -> UntriedMoves {
    let mut moves: UntriedMoves = state.possible_moves().iter().copied().collect();
    for child in tree.children(node) {
        let mv = tree.get(child).mv;
        if let Some(index) = moves.iter().position(|m| *m == mv) {
            moves.swap_remove(index);
        }
    }
    moves
}

/// UCT over the children legal in this sample, scored with
/// `wins/visits + sqrt(ln(availability)/visits)`.
///
/// Only called when the sample leaves no untried move, so every legal
/// child has been visited and the divisions are safe. `possible_moves` is
/// never empty, which guarantees at least one legal child here.
fn select_available(tree: &SearchTree, parent: NodeId, state: &GameState) -> NodeId {
    let mut best = NodeId::NONE;
    let mut best_score = f64::NEG_INFINITY;

    for child in tree.children(parent) {
        let node = tree.get(child);
        if !state.is_legal(node.mv) {
            continue;
        }
        let visits = f64::from(node.visits);
        let score = f64::from(node.wins) / visits + (f64::from(node.availability).ln() / visits).sqrt();
        if score > best_score {
            best_score = score;
            best = child;
        }
    }

    best
}

/// Credit availability to every child whose move is legal in this sample,
/// whether or not it is the one selected.
fn bump_availability(tree: &mut SearchTree, parent: NodeId, state: &GameState) {
    let mut child = tree.get(parent).first_child;
    while !child.is_none() {
        let node = tree.get_mut(child);
        if state.is_legal(node.mv) {
            node.availability += 1;
        }
        child = node.next_sibling;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn midgame_state() -> GameState {
        let mut state = GameState::new();
        for _ in 0..6 {
            state.players[0].deck.push(Card::BloodfenRaptor);
            state.players[1].deck.push(Card::RiverCrocolisk);
        }
        for _ in 0..3 {
            state.players[1].hand.push(Card::TheCoin);
        }
        state.players[0].mana = 2;
        state.players[0].hand.push(Card::BluegillWarrior);
        state.update_possible_moves();
        state
    }

    #[test]
    fn test_returns_legal_move() {
        let state = midgame_state();
        let mut engine = SoIsMcts::new(60, 17);

        let mv = engine.choose_move(&state);

        assert!(state.is_legal(mv));
    }

    #[test]
    fn test_availability_bounds() {
        let state = midgame_state();
        let mut engine = SoIsMcts::new(120, 5);
        engine.choose_move(&state);

        let tree = engine.tree();
        for (id, node) in tree.iter() {
            for child in tree.children(id) {
                let child_node = tree.get(child);
                assert!(child_node.availability <= node.visits);
                assert!(child_node.availability >= child_node.visits);
            }
        }
    }

    #[test]
    fn test_single_tree_accumulates_all_iterations() {
        let state = GameState::new();
        let mut engine = SoIsMcts::new(50, 23);

        let mv = engine.choose_move(&state);

        assert_eq!(mv, Move::EndTurn);
        assert_eq!(engine.tree().get(engine.tree().root()).visits, 50);
    }
}
