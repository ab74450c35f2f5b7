//! Main implementation of the Monte Carlo Tree Search algorithm
//!
//! This module orchestrates the four phases of selection, expansion,
//! simulation, and backpropagation over a [`SearchTree`].

use std::time::Instant;

use log::{debug, trace};
use rand::Rng;

use crate::{
    config::MCTSConfig,
    game_state::{GameState, Move},
    policy::{
        decision,
        selection::{SelectionPolicy, UCB1Policy},
        simulation::{RandomPolicy, SimulationPolicy},
    },
    stats::SearchStatistics,
    tree::{NodeId, SearchNode, SearchTree},
    Result,
};

/// The main Monte Carlo Tree Search implementation
///
/// Every search starts from a fresh tree rooted at the initial state; nothing
/// is carried over between searches.
pub struct MCTS<S: GameState> {
    /// The search tree of the most recent search
    tree: SearchTree<S>,

    /// Configuration for the search
    config: MCTSConfig,

    /// Statistics gathered during search
    statistics: SearchStatistics,

    /// Policy for selecting nodes during the selection phase
    selection_policy: Box<dyn SelectionPolicy<S>>,

    /// Policy for simulating games during the simulation phase
    simulation_policy: Box<dyn SimulationPolicy<S>>,
}

impl<S: GameState + 'static> MCTS<S> {
    /// Creates a new MCTS instance with the given initial state and configuration
    pub fn new(initial_state: S, config: MCTSConfig) -> Self {
        let selection_policy: Box<dyn SelectionPolicy<S>> =
            Box::new(UCB1Policy::new(config.exploration_constant));

        let simulation_policy: Box<dyn SimulationPolicy<S>> = Box::new(RandomPolicy::new());

        MCTS {
            tree: SearchTree::new(initial_state),
            config,
            statistics: SearchStatistics::default(),
            selection_policy,
            simulation_policy,
        }
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the simulation policy to use
    pub fn with_simulation_policy<P: SimulationPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    /// Runs the configured number of iterations and returns the chosen move
    ///
    /// `Ok(None)` means there is no move to play: the budget was zero or the
    /// position has no legal move.
    ///
    /// # Errors
    ///
    /// Fails only if the configuration is invalid.
    pub fn search<R: Rng>(&mut self, rng: &mut R) -> Result<Option<Move>> {
        self.config.validate()?;
        Ok(self.run(self.config.max_iterations, rng))
    }

    /// Runs exactly `iterations` iterations on a fresh tree
    ///
    /// A terminal root short-circuits: no iteration runs and no node is
    /// touched.
    pub fn run<R: Rng>(&mut self, iterations: usize, rng: &mut R) -> Option<Move> {
        self.reset_tree();
        self.statistics = SearchStatistics::default();

        if self.tree.get(self.tree.root()).is_terminal() {
            debug!("root position has no legal moves, skipping search");
            self.statistics.record_tree(&self.tree, None);
            return None;
        }

        let start_time = Instant::now();

        for i in 0..iterations {
            self.execute_iteration(rng);
            self.statistics.iterations = i + 1;
        }

        self.statistics.elapsed = start_time.elapsed();

        let root = self.tree.root();
        let best = decision::best_child(&self.tree, root, self.config.best_child_criteria);
        self.statistics.record_tree(&self.tree, best);

        let best_move = best.and_then(|id| self.tree.get(id).incoming);
        debug!("{}", self.statistics.summary());
        debug!("best move: {:?}", best_move);

        best_move
    }

    /// Replaces a used tree with a fresh root for the same position
    fn reset_tree(&mut self) {
        let root = self.tree.get(self.tree.root());
        if self.tree.len() > 1 || root.visits() > 0 {
            let state = root.state.clone();
            self.tree = SearchTree::new(state);
        }
    }

    /// Execute a single iteration of the MCTS algorithm
    fn execute_iteration<R: Rng>(&mut self, rng: &mut R) {
        // 1. Selection phase
        let mut path = self.tree.select(&self.selection_policy);
        let leaf = path.last().copied().unwrap_or_else(|| self.tree.root());

        // 2. Expansion phase
        let expanded = self.tree.expand(leaf, rng);
        if expanded != leaf {
            path.push(expanded);
        } else if self.tree.get(leaf).is_terminal() {
            self.statistics.terminal_selections += 1;
        }
        self.statistics.max_depth = self.statistics.max_depth.max(self.tree.get(expanded).depth);

        // 3. Simulation phase
        let winner = self
            .simulation_policy
            .simulate(&self.tree.get(expanded).state, rng);

        trace!(
            "iteration path of {} nodes ending at {}, winner {}",
            path.len(),
            expanded,
            winner
        );

        // 4. Backpropagation phase
        self.tree.backpropagate(&path, winner);
    }

    /// Returns the search statistics
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the tree built by the most recent search
    pub fn tree(&self) -> &SearchTree<S> {
        &self.tree
    }

    /// Returns the configuration
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Returns a visualization of the search tree
    pub fn visualize_tree(&self) -> String {
        let mut result = String::new();
        self.visualize_node(self.tree.root(), &mut result);
        result
    }

    /// Helper method to visualize a node and its children
    fn visualize_node(&self, id: NodeId, output: &mut String) {
        let node: &SearchNode<S> = self.tree.get(id);
        let indent = "  ".repeat(node.depth);
        let action_str = match &node.incoming {
            Some(mv) => mv.to_string(),
            None => "Root".to_string(),
        };

        output.push_str(&format!(
            "{}{} (visits: {}, wins: {})\n",
            indent,
            action_str,
            node.visits(),
            node.wins()
        ));

        for &child in &node.children {
            self.visualize_node(child, output);
        }
    }
}

/// Chooses a move for `state` with a plain UCB1 search of `iterations` iterations
///
/// Returns None when there is nothing to play.
///
/// ```
/// use nogo_mcts::{decide, nogo::NoGoBoard, GameState};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let board = NoGoBoard::new(3, 3).unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// let mv = decide(&board, 100, &mut rng).unwrap();
/// assert!(board.apply(mv.index).is_ok());
/// ```
pub fn decide<S: GameState + 'static, R: Rng>(
    state: &S,
    iterations: usize,
    rng: &mut R,
) -> Option<Move> {
    let config = MCTSConfig::default().with_max_iterations(iterations);
    MCTS::new(state.clone(), config).run(iterations, rng)
}
