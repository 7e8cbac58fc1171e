//! Arena-based search tree shared by all three engines.
//!
//! Nodes live in a flat `Vec` and point at each other by index: parent,
//! first child, next sibling. That keeps child insertion O(1), parent
//! traversal cheap for backpropagation, and ownership trivial - the arena
//! belongs to one `choose_move` call and is reset wholesale by the next.

use smallvec::SmallVec;

use crate::game::Move;

/// Index into the tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node".
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// True for the sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// Per-node untried-move storage. Only the engines with a fixed untried
/// set (Cheating, Determinized) populate it; SO-ISMCTS recomputes untried
/// moves per iteration instead.
pub type UntriedMoves = SmallVec<[Move; 8]>;

/// One node of a search tree.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub parent: NodeId,
    pub first_child: NodeId,
    pub next_sibling: NodeId,
    /// The move that produced this node from its parent (unused on the
    /// root).
    pub mv: Move,
    /// Times this node was on a backpropagation path.
    pub visits: u32,
    /// Playouts through this node the searching player won.
    pub wins: u32,
    /// Times this node's move was legal when its parent was visited
    /// (SO-ISMCTS only; stays zero elsewhere).
    pub availability: u32,
    /// Legal moves not yet expanded into children.
    pub untried: UntriedMoves,
}

impl SearchNode {
    fn new(parent: NodeId, mv: Move, untried: &[Move]) -> Self {
        Self {
            parent,
            first_child: NodeId::NONE,
            next_sibling: NodeId::NONE,
            mv,
            visits: 0,
            wins: 0,
            availability: 0,
            untried: UntriedMoves::from_slice(untried),
        }
    }
}

/// Flat arena of `SearchNode`s with the root at index 0.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Create a tree whose root holds the given untried moves.
    #[must_use]
    pub fn new(root_untried: &[Move]) -> Self {
        Self::with_capacity(root_untried, 256)
    }

    /// Create a tree with a node capacity hint (one node per planned
    /// iteration plus the root is exact).
    #[must_use]
    pub fn with_capacity(root_untried: &[Move], capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::new(NodeId::NONE, Move::EndTurn, root_untried));
        Self { nodes }
    }

    /// Drop every node and start over with a fresh root.
    pub fn reset(&mut self, root_untried: &[Move], capacity: usize) {
        self.nodes.clear();
        self.nodes.reserve(capacity.max(1));
        self.nodes
            .push(SearchNode::new(NodeId::NONE, Move::EndTurn, root_untried));
    }

    /// The root's ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow a node.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Borrow a node mutably.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false once constructed (the root exists); paired with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a child under `parent` for `mv`, prepended to the child list.
    pub fn add_child(&mut self, parent: NodeId, mv: Move, untried: &[Move]) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut node = SearchNode::new(parent, mv, untried);
        node.next_sibling = self.nodes[parent.0 as usize].first_child;
        self.nodes.push(node);
        self.nodes[parent.0 as usize].first_child = id;
        id
    }

    /// True when `id` has at least one child.
    #[must_use]
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.get(id).first_child.is_none()
    }

    /// Iterate over the children of `id`.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).first_child,
        }
    }

    /// Iterate over every node in the arena.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// The most-visited child of `id`, if any.
    #[must_use]
    pub fn best_child_by_visits(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .max_by_key(|&child| self.get(child).visits)
    }

    /// Walk from `from` to the root, bumping visit counts and crediting
    /// wins when the searching player took the playout.
    pub fn backpropagate(&mut self, from: NodeId, won: bool) {
        let mut current = from;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            if won {
                node.wins += 1;
            }
            current = node.parent;
        }
    }
}

/// Iterator over a node's children via sibling links.
pub struct Children<'a> {
    tree: &'a SearchTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.next.is_none() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).next_sibling;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_starts_with_untried_moves() {
        let tree = SearchTree::new(&[Move::EndTurn, Move::attack_hero(0)]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(tree.root()).untried.len(), 2);
        assert!(!tree.has_children(tree.root()));
    }

    #[test]
    fn test_add_child_links_siblings() {
        let mut tree = SearchTree::new(&[]);
        let root = tree.root();

        let a = tree.add_child(root, Move::attack_hero(0), &[]);
        let b = tree.add_child(root, Move::attack_hero(1), &[]);

        let children: Vec<NodeId> = tree.children(root).collect();
        assert_eq!(children, vec![b, a]);
        assert_eq!(tree.get(a).parent, root);
        assert_eq!(tree.get(b).parent, root);
    }

    #[test]
    fn test_backpropagate_updates_path_only() {
        let mut tree = SearchTree::new(&[]);
        let root = tree.root();
        let a = tree.add_child(root, Move::attack_hero(0), &[]);
        let b = tree.add_child(root, Move::attack_hero(1), &[]);
        let leaf = tree.add_child(a, Move::EndTurn, &[]);

        tree.backpropagate(leaf, true);
        tree.backpropagate(leaf, false);

        assert_eq!(tree.get(leaf).visits, 2);
        assert_eq!(tree.get(leaf).wins, 1);
        assert_eq!(tree.get(a).visits, 2);
        assert_eq!(tree.get(root).visits, 2);
        assert_eq!(tree.get(b).visits, 0);
    }

    #[test]
    fn test_best_child_by_visits() {
        let mut tree = SearchTree::new(&[]);
        let root = tree.root();
        let a = tree.add_child(root, Move::attack_hero(0), &[]);
        let b = tree.add_child(root, Move::attack_hero(1), &[]);

        tree.get_mut(a).visits = 3;
        tree.get_mut(b).visits = 7;

        assert_eq!(tree.best_child_by_visits(root), Some(b));
        assert_eq!(tree.get(tree.best_child_by_visits(root).unwrap()).mv, Move::attack_hero(1));
    }

    #[test]
    fn test_reset_discards_nodes() {
        let mut tree = SearchTree::new(&[]);
        let root = tree.root();
        tree.add_child(root, Move::EndTurn, &[]);
        assert_eq!(tree.len(), 2);

        tree.reset(&[Move::EndTurn], 8);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(tree.root()).untried.as_slice(), &[Move::EndTurn]);
    }
}
