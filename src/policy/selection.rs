//! Selection policies for the MCTS algorithm
//!
//! Selection policies determine which child to descend into during the
//! selection phase, balancing exploration and exploitation.

use crate::{
    game_state::GameState,
    tree::{NodeId, SearchTree},
    utils,
};

/// Trait for policies that select nodes to explore
pub trait SelectionPolicy<S: GameState>: Send + Sync {
    /// Picks the child of `node` to follow, or None if it has no children
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// This is the classic selection policy for MCTS:
///
/// ```text
/// UCB1 = wins / visits + exploration_constant * sqrt(ln(parent_visits) / visits)
/// ```
///
/// An unvisited child scores positive infinity, so every child is tried once
/// before any is revisited. Ties keep the child created first.
///
/// The commonly used value for the exploration constant is sqrt(2), which is
/// the default in this implementation.
#[derive(Debug, Clone)]
pub struct UCB1Policy {
    /// Exploration constant that controls the balance between exploration and exploitation.
    /// Higher values favor exploration of less-visited nodes.
    pub exploration_constant: f64,
}

impl UCB1Policy {
    /// Creates a new UCB1 policy with the given exploration constant
    pub fn new(exploration_constant: f64) -> Self {
        UCB1Policy {
            exploration_constant,
        }
    }

    /// Calculates the UCB1 value for a child
    pub fn ucb1_value(&self, child_wins: u64, child_visits: u64, parent_visits: u64) -> f64 {
        utils::ucb1_value(
            child_wins,
            child_visits,
            parent_visits,
            self.exploration_constant,
        )
    }
}

impl Default for UCB1Policy {
    fn default() -> Self {
        Self::new(std::f64::consts::SQRT_2)
    }
}

impl<S: GameState> SelectionPolicy<S> for UCB1Policy {
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId> {
        let parent_visits = tree.get(node).visits();
        let mut best: Option<(NodeId, f64)> = None;

        for &child in &tree.get(node).children {
            let stats = tree.get(child).stats();

            // Unvisited children win outright; the first one found is taken.
            if stats.visits() == 0 {
                return Some(child);
            }

            let value = self.ucb1_value(stats.wins(), stats.visits(), parent_visits);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((child, value)),
            }
        }

        best.map(|(child, _)| child)
    }
}

impl<S: GameState> SelectionPolicy<S> for Box<dyn SelectionPolicy<S>> {
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId> {
        (**self).select_child(tree, node)
    }
}
