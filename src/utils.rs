//! Utility functions for the MCTS algorithm

use rand::seq::SliceRandom;
use rand::Rng;

/// Calculates the exploration term for UCB1
///
/// Returns infinity for an unvisited child.
pub fn exploration_term(parent_visits: u64, child_visits: u64, exploration_constant: f64) -> f64 {
    if child_visits == 0 {
        return f64::INFINITY;
    }

    exploration_constant * ((parent_visits as f64).ln() / child_visits as f64).sqrt()
}

/// Calculates the UCB1 value of a child from its win and visit counts
///
/// Returns infinity for an unvisited child.
pub fn ucb1_value(wins: u64, visits: u64, parent_visits: u64, exploration_constant: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }

    win_rate(wins, visits) + exploration_term(parent_visits, visits, exploration_constant)
}

/// Safely calculates the win rate from wins and visits
///
/// Returns 0.0 if no visits have occurred.
pub fn win_rate(wins: u64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    wins as f64 / visits as f64
}

/// Returns every index of an action space in random order
pub fn shuffled_moves<R: Rng + ?Sized>(action_space: usize, rng: &mut R) -> Vec<usize> {
    let mut moves: Vec<usize> = (0..action_space).collect();
    moves.shuffle(rng);
    moves
}
