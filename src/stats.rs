//! Counters describing a single search
//!
//! A [`SearchStatistics`] is rebuilt on every run. Loop counters are bumped by
//! the search driver; the root figures are read off the finished tree.

use std::time::Duration;

use crate::{
    game_state::GameState,
    tree::{NodeId, SearchTree},
};

/// What one search did and how the root ended up
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Iterations completed
    pub iterations: usize,

    /// Wall time of the iteration loop
    pub elapsed: Duration,

    /// Nodes in the finished tree, root included
    pub tree_size: usize,

    /// Deepest node an iteration simulated from
    pub max_depth: usize,

    /// Iterations whose selected leaf was terminal, so nothing was expanded
    pub terminal_selections: usize,

    /// Visits recorded at the root
    pub root_visits: u64,

    /// Moves expanded under the root
    pub root_children: usize,

    /// Visits of the root child the decision picked; 0 without a decision
    pub best_visits: u64,
}

impl SearchStatistics {
    /// Fills in the figures that depend on the finished tree
    pub fn record_tree<S: GameState>(&mut self, tree: &SearchTree<S>, best: Option<NodeId>) {
        let root = tree.get(tree.root());
        self.tree_size = tree.len();
        self.root_visits = root.visits();
        self.root_children = root.children.len();
        self.best_visits = best.map_or(0, |id| tree.get(id).visits());
    }

    /// Share of root visits that went through the chosen move
    ///
    /// Close to 1.0 means the search settled on one move early.
    pub fn best_visit_share(&self) -> f64 {
        ratio(self.best_visits, self.root_visits)
    }

    /// Share of iterations that ended on an already decided position
    pub fn terminal_ratio(&self) -> f64 {
        ratio(self.terminal_selections as u64, self.iterations as u64)
    }

    pub fn iterations_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / secs
    }

    /// One-line report for logs
    pub fn summary(&self) -> String {
        format!(
            "{} iterations in {:.1} ms ({:.0}/s), {} nodes, depth {}, \
             {} root moves, best move {:.1}% of visits, {:.1}% terminal leaves",
            self.iterations,
            self.elapsed.as_secs_f64() * 1000.0,
            self.iterations_per_second(),
            self.tree_size,
            self.max_depth,
            self.root_children,
            self.best_visit_share() * 100.0,
            self.terminal_ratio() * 100.0,
        )
    }
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}
