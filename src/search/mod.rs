//! Move selection via Monte Carlo Tree Search.
//!
//! Three engines share one node/tree vocabulary and one iteration shape
//! (selection, expansion, simulation, backpropagation), differing in how
//! they handle hidden information:
//!
//! - [`CheatingMcts`] searches the true state as if everything were
//!   visible - an upper-bound baseline, not a fair player.
//! - [`DeterminizedMcts`] samples N determinizations, searches each with a
//!   fresh tree, and sums root visit counts per move.
//! - [`SoIsMcts`] keeps a single tree over the information set,
//!   re-determinizing every iteration and tracking per-child availability.
//!
//! Search is synchronous and single-threaded within one `choose_move`
//! call; the iteration budget is the only termination control.

pub mod cheating;
pub mod determinize;
pub mod determinized;
pub mod ismcts;
pub mod strategy;
pub mod tree;

pub use cheating::CheatingMcts;
pub use determinize::determinize;
pub use determinized::DeterminizedMcts;
pub use ismcts::SoIsMcts;
pub use strategy::{RandomStrategy, Strategy};
pub use tree::{NodeId, SearchNode, SearchTree};

use crate::core::GameRng;
use crate::game::{GameState, PlayerId, Winner};

/// One select-expand-simulate-backpropagate pass over a tree with stored
/// untried-move sets (the perfect-information loop shared by Cheating and
/// Determinized MCTS).
pub(crate) fn uct_iteration(
    tree: &mut SearchTree,
    base: &GameState,
    searcher: PlayerId,
    rng: &mut GameRng,
) {
    let mut sim = base.clone();
    let mut node = tree.root();

    // Selection: descend only through fully expanded nodes.
    while tree.get(node).untried.is_empty() && tree.has_children(node) {
        node = uct_select(tree, node);
        sim.process_move(tree.get(node).mv);
    }

    // Expansion: instantiate one untried child.
    if !tree.get(node).untried.is_empty() {
        let pick = rng.gen_range_usize(0..tree.get(node).untried.len());
        let mv = tree.get_mut(node).untried.swap_remove(pick);
        sim.process_move(mv);
        node = tree.add_child(node, mv, sim.possible_moves().as_slice());
    }

    // Simulation, then credit the path. Only a win for the searching
    // player counts; opponent wins and draws credit nothing.
    sim.play_out_randomly(rng);
    tree.backpropagate(node, sim.winner == Winner::for_player(searcher));
}

/// Pick the child maximizing `wins/visits + sqrt(ln(parent_visits)/visits)`.
///
/// Selection only runs once every child has been visited (expansion
/// dominates until the untried set is empty), so the divisions are safe.
pub(crate) fn uct_select(tree: &SearchTree, parent: NodeId) -> NodeId {
    let ln_parent = f64::from(tree.get(parent).visits).ln();
    let mut best = NodeId::NONE;
    let mut best_score = f64::NEG_INFINITY;

    for child in tree.children(parent) {
        let node = tree.get(child);
        let visits = f64::from(node.visits);
        let score = f64::from(node.wins) / visits + (ln_parent / visits).sqrt();
        if score > best_score {
            best_score = score;
            best = child;
        }
    }

    best
}
