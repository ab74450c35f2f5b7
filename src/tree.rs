//! Tree data structures for Monte Carlo Tree Search
//!
//! Nodes live in an arena owned by [`SearchTree`] and refer to each other by
//! [`NodeId`]. Growing the arena never invalidates a handle, so a child can
//! keep its parent's id for as long as the tree exists.

use std::fmt;

use log::warn;
use rand::Rng;

use crate::{
    game_state::{GameState, Move, PlayerId},
    policy::selection::SelectionPolicy,
    utils,
};

/// Index of a node in the tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visit and win counters of a node
///
/// Wins are counted for the player who chose the move leading to the node.
/// Counters only grow; `wins <= visits` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStats {
    visits: u64,
    wins: u64,
}

impl NodeStats {
    /// Number of simulations that passed through the node
    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// Number of those simulations won by the node's mover
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Records one simulation result
    pub fn record(&mut self, won: bool) {
        self.visits += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Win rate of the node's mover, 0.0 when unvisited
    pub fn win_rate(&self) -> f64 {
        utils::win_rate(self.wins, self.visits)
    }
}

/// Represents a node in the MCTS tree
pub struct SearchNode<S: GameState> {
    /// The position at this node
    pub state: S,

    /// The move that produced this node (None for root)
    pub incoming: Option<Move>,

    /// Handle of the parent node (None for root)
    pub parent: Option<NodeId>,

    /// Children in creation order, unique by move index
    pub children: Vec<NodeId>,

    /// Player credited with wins at this node
    ///
    /// This is the player who chose the incoming move. For the root it is the
    /// player who moved into the root position.
    pub mover: PlayerId,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,

    stats: NodeStats,
    legal_moves: usize,
}

impl<S: GameState> SearchNode<S> {
    fn new(state: S, incoming: Option<Move>, parent: Option<NodeId>, depth: usize) -> Self {
        let legal_moves = state.legal_move_count();
        let mover = match incoming {
            Some(mv) => mv.player,
            None => state.current_player().opponent(),
        };

        SearchNode {
            state,
            incoming,
            parent,
            children: Vec::new(),
            mover,
            depth,
            stats: NodeStats::default(),
            legal_moves,
        }
    }

    /// Returns the node's statistics
    pub fn stats(&self) -> NodeStats {
        self.stats
    }

    /// Returns the number of visits to this node
    pub fn visits(&self) -> u64 {
        self.stats.visits
    }

    /// Returns the number of wins recorded for this node's mover
    pub fn wins(&self) -> u64 {
        self.stats.wins
    }

    /// Number of legal moves in this node's position, computed once
    pub fn legal_moves(&self) -> usize {
        self.legal_moves
    }

    /// Returns true if the player to move has no legal move
    pub fn is_terminal(&self) -> bool {
        self.legal_moves == 0
    }

    /// Returns true if every legal move has a child
    pub fn is_fully_expanded(&self) -> bool {
        self.children.len() == self.legal_moves
    }

    /// Returns true if selection may descend below this node
    pub fn is_selectable(&self) -> bool {
        !self.is_terminal() && self.is_fully_expanded()
    }
}

/// Search tree with arena-based node storage
///
/// The root is always the first node in the arena.
pub struct SearchTree<S: GameState> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: GameState> SearchTree<S> {
    /// Creates a tree holding only a root for the given position
    pub fn new(state: S) -> Self {
        SearchTree {
            nodes: vec![SearchNode::new(state, None, None, 0)],
        }
    }

    /// Returns the root handle
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns a node by handle
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Total number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node in creation order
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.nodes.iter()
    }

    /// Returns the child of `id` reached by the given move index, if expanded
    pub fn child_by_move(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.get(id)
            .children
            .iter()
            .copied()
            .find(|&child| self.get(child).incoming.map(|mv| mv.index) == Some(index))
    }

    /// Walks from the root down through fully expanded, non-terminal nodes
    ///
    /// At every step the policy picks the child to follow. Returns the path,
    /// root first and the selected leaf last.
    pub fn select(&self, policy: &dyn SelectionPolicy<S>) -> Vec<NodeId> {
        let mut path = vec![self.root()];
        let mut current = self.root();

        while self.get(current).is_selectable() {
            match policy.select_child(self, current) {
                Some(child) => {
                    path.push(child);
                    current = child;
                }
                None => break,
            }
        }

        path
    }

    /// Adds one child to `leaf` for a random legal move not yet expanded
    ///
    /// Candidate indices are tried in random order; occupied slots and moves
    /// the rules reject are skipped. Returns the new child, or `leaf` itself
    /// when it is terminal or no candidate qualifies.
    pub fn expand<R: Rng + ?Sized>(&mut self, leaf: NodeId, rng: &mut R) -> NodeId {
        let node = self.get(leaf);
        if node.is_terminal() {
            return leaf;
        }

        let candidates = utils::shuffled_moves(node.state.action_space(), rng);

        for index in candidates {
            if self.child_by_move(leaf, index).is_some() {
                continue;
            }

            let node = self.get(leaf);
            if let Ok(next_state) = node.state.apply(index) {
                let incoming = Move::new(index, node.state.current_player());
                let depth = node.depth + 1;
                return self.add_child(leaf, next_state, incoming, depth);
            }
        }

        warn!(
            "node {} reported {} legal moves but none could be expanded",
            leaf,
            self.get(leaf).legal_moves
        );
        leaf
    }

    fn add_child(&mut self, parent: NodeId, state: S, incoming: Move, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(SearchNode::new(state, Some(incoming), Some(parent), depth));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Records a simulation result on every node of the path
    ///
    /// Each node gets one visit; it gets a win when `winner` is the node's
    /// mover.
    pub fn backpropagate(&mut self, path: &[NodeId], winner: PlayerId) {
        for &id in path {
            let node = &mut self.nodes[id.0];
            let won = node.mover == winner;
            node.stats.record(won);
        }
    }
}
