//! Simulation policies for the MCTS algorithm
//!
//! Simulation policies play a game out from a given position and report who
//! won, giving one sample of how good the position is.

use rand::RngCore;

use crate::game_state::{GameState, PlayerId};

/// Trait for policies that simulate games
pub trait SimulationPolicy<S: GameState>: Send + Sync {
    /// Plays out the game from `state` and returns the winner
    fn simulate(&self, state: &S, rng: &mut dyn RngCore) -> PlayerId;
}

/// Random simulation policy
///
/// This policy plays uniformly random legal moves until the game ends.
#[derive(Debug, Clone)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy
    pub fn new() -> Self {
        RandomPolicy
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> SimulationPolicy<S> for RandomPolicy {
    fn simulate(&self, state: &S, rng: &mut dyn RngCore) -> PlayerId {
        state.random_playout(rng)
    }
}

impl<S: GameState> SimulationPolicy<S> for Box<dyn SimulationPolicy<S>> {
    fn simulate(&self, state: &S, rng: &mut dyn RngCore) -> PlayerId {
        (**self).simulate(state, rng)
    }
}
