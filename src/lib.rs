//! # nogo-mcts
//!
//! A Monte Carlo Tree Search (MCTS) engine for NoGo and other two-player,
//! alternating-move games in which the player left without a legal move loses.
//!
//! The engine is given a position and an iteration budget and returns a single
//! recommended move. Each decision builds a fresh search tree, runs the
//! requested number of iterations, picks the most visited root child and then
//! drops the tree.
//!
//! ## Features
//!
//! - Generic over any rules engine implementing [`GameState`]
//! - UCB1 selection, uniformly random rollouts, most-visits decision
//! - Arena-backed tree with stable node handles
//! - Reproducible searches from a seeded random source
//! - A NoGo rules engine and ready-made agents
//!
//! ## Basic Usage
//!
//! ```
//! use nogo_mcts::{nogo::NoGoBoard, GameState, MCTSConfig, MCTS};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! fn main() -> Result<(), nogo_mcts::MCTSError> {
//!     let board = NoGoBoard::new(5, 5)?;
//!
//!     let config = MCTSConfig::default()
//!         .with_exploration_constant(1.414)
//!         .with_max_iterations(200);
//!
//!     let mut mcts = MCTS::new(board.clone(), config);
//!     let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//!     if let Some(mv) = mcts.search(&mut rng)? {
//!         println!("{} plays {}", mv.player, board.coord(mv.index).unwrap_or_default());
//!     }
//!     println!("{}", mcts.get_statistics().summary());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Every iteration runs four phases:
//!
//! 1. **Selection**: Starting from the root, follow the child with the best UCB1
//!    score while the current node is fully expanded and not terminal.
//!
//! 2. **Expansion**: Add one child for a random legal move that has no child yet.
//!
//! 3. **Simulation**: Play random legal moves from the new node until a player
//!    has no move; that player loses.
//!
//! 4. **Backpropagation**: Every node on the path gets a visit, and a win when
//!    the simulation winner is the player who chose the move into that node.
//!
//! ## Playing a game
//!
//! ```
//! use nogo_mcts::{
//!     agent::{Agent, MctsAgent, RandomAgent},
//!     nogo::NoGoBoard,
//!     AgentConfig, GameState, PlayerId,
//! };
//!
//! let mut black = MctsAgent::from_args("name=mcts role=black seed=1 N=50").unwrap();
//! let mut white = RandomAgent::new(AgentConfig::new(PlayerId::Second).with_seed(2)).unwrap();
//!
//! let mut board = NoGoBoard::new(3, 3).unwrap();
//! loop {
//!     let mv = match board.current_player() {
//!         PlayerId::First => black.take_action(&board),
//!         PlayerId::Second => white.take_action(&board),
//!     };
//!     match mv {
//!         Some(mv) => board = board.apply(mv.index).unwrap(),
//!         None => break,
//!     }
//! }
//! println!("{} has no move left", board.current_player());
//! ```

pub mod agent;
pub mod config;
pub mod game_state;
pub mod mcts;
pub mod nogo;
pub mod policy;
pub mod stats;
pub mod tree;
pub mod utils;

pub use config::{AgentConfig, MCTSConfig};
pub use game_state::{GameState, IllegalMove, Move, PlayerId};
pub use mcts::{decide, MCTS};
pub use policy::{SelectionPolicy, SimulationPolicy};
pub use stats::SearchStatistics;
pub use tree::{NodeId, NodeStats, SearchNode, SearchTree};

/// Error types for the MCTS engine and its agents
#[derive(thiserror::Error, Debug)]
pub enum MCTSError {
    /// Invalid search configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An agent argument could not be parsed
    #[error("Invalid argument: {key}={value}")]
    InvalidArgument { key: String, value: String },

    /// An agent name contains reserved characters
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// An agent role is missing or unknown
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// A board position could not be built
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

/// Result type for MCTS operations
pub type Result<T> = std::result::Result<T, MCTSError>;
