//! Policies for different phases of the MCTS algorithm
//!
//! This module contains the policies used by the search:
//! - Selection policies: How to choose which nodes to explore
//! - Simulation policies: How to play out games from a node
//! - Decision: How to pick the move once the budget is spent

pub mod decision;
pub mod selection;
pub mod simulation;

pub use decision::{best_child, best_move};
pub use selection::{SelectionPolicy, UCB1Policy};
pub use simulation::{RandomPolicy, SimulationPolicy};
