//! Configuration options for the search and for agents
//!
//! [`MCTSConfig`] controls a single search. [`AgentConfig`] describes a player
//! and can be parsed from the `key=value` argument strings game harnesses pass
//! around, e.g. `"name=mcts role=black seed=7 N=400"`.

use std::str::FromStr;

use log::debug;

use crate::{game_state::PlayerId, MCTSError, Result};

/// Default number of iterations per decision
pub const DEFAULT_ITERATIONS: usize = 200;

/// Characters that may not appear in an agent name
const RESERVED_NAME_CHARS: &[char] = &['[', ']', '(', ')', ':', ';', ' '];

/// Criteria for selecting the best child after search is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestChildCriteria {
    /// Select the child with the most visits
    ///
    /// Visit counts are the robust choice and the standard one in MCTS.
    MostVisits,

    /// Select the child with the highest win rate
    ///
    /// More aggressive; a rarely visited child with a lucky record can win.
    HighestWinRate,
}

/// Configuration for the MCTS algorithm
///
/// # Example
///
/// ```
/// use nogo_mcts::{MCTSConfig, config::BestChildCriteria};
///
/// let config = MCTSConfig::default()
///     .with_exploration_constant(1.0)
///     .with_max_iterations(1_000)
///     .with_best_child_criteria(BestChildCriteria::MostVisits);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MCTSConfig {
    /// Exploration constant for UCB1
    ///
    /// The standard value is sqrt(2).
    pub exploration_constant: f64,

    /// Number of iterations to run; the only search budget
    pub max_iterations: usize,

    /// Criteria for selecting the best child after search
    pub best_child_criteria: BestChildCriteria,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        MCTSConfig {
            exploration_constant: std::f64::consts::SQRT_2,
            max_iterations: DEFAULT_ITERATIONS,
            best_child_criteria: BestChildCriteria::MostVisits,
        }
    }
}

impl MCTSConfig {
    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the maximum number of iterations
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the criteria for selecting the best child
    pub fn with_best_child_criteria(mut self, criteria: BestChildCriteria) -> Self {
        self.best_child_criteria = criteria;
        self
    }

    /// Checks that the configuration can drive a search
    ///
    /// # Errors
    ///
    /// The exploration constant must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(MCTSError::InvalidConfiguration(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}

/// Configuration of a playing agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Display name; must not contain any of `[]():;` or spaces
    pub name: String,

    /// The side this agent plays
    pub role: PlayerId,

    /// Seed for the agent's random source; None seeds from entropy
    pub seed: Option<u64>,

    /// Search iterations per decision
    pub iterations: usize,
}

impl AgentConfig {
    /// Creates a config with the given role and default settings
    pub fn new(role: PlayerId) -> Self {
        AgentConfig {
            name: "mcts".to_string(),
            role,
            seed: None,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the iterations per decision
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Checks the name for reserved characters
    ///
    /// # Errors
    ///
    /// Returns [`MCTSError::InvalidName`] for empty names or names containing
    /// `[]():;` or spaces.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.name.contains(RESERVED_NAME_CHARS) {
            return Err(MCTSError::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

/// Parses a role name
///
/// Accepts `black`/`first` and `white`/`second`, case-insensitively.
pub fn parse_role(value: &str) -> Result<PlayerId> {
    match value.to_ascii_lowercase().as_str() {
        "black" | "first" => Ok(PlayerId::First),
        "white" | "second" => Ok(PlayerId::Second),
        _ => Err(MCTSError::InvalidRole(value.to_string())),
    }
}

impl FromStr for AgentConfig {
    type Err = MCTSError;

    /// Parses whitespace-separated `key=value` pairs
    ///
    /// Recognized keys are `name`, `role`, `seed` and `N` (alias
    /// `iterations`). Later pairs override earlier ones; unknown keys are
    /// ignored.
    fn from_str(args: &str) -> Result<Self> {
        let mut name = "mcts".to_string();
        let mut role = None;
        let mut seed = None;
        let mut iterations = DEFAULT_ITERATIONS;

        for pair in args.split_whitespace() {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let invalid = || MCTSError::InvalidArgument {
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "name" => name = value.to_string(),
                "role" => role = Some(parse_role(value)?),
                "seed" => seed = Some(value.parse().map_err(|_| invalid())?),
                "N" | "iterations" => iterations = value.parse().map_err(|_| invalid())?,
                _ => debug!("ignoring unrecognized agent argument {}={}", key, value),
            }
        }

        let config = AgentConfig {
            name,
            role: role.ok_or_else(|| MCTSError::InvalidRole("unknown".to_string()))?,
            seed,
            iterations,
        };
        config.validate()?;
        Ok(config)
    }
}
