//! Players that turn positions into moves
//!
//! An agent owns its random source for its whole lifetime. [`MctsAgent`]
//! builds a fresh search tree for every decision and drops it afterwards.

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::{
    config::{AgentConfig, MCTSConfig},
    game_state::{GameState, Move, PlayerId},
    mcts::MCTS,
    utils, Result,
};

/// A player that can be asked for a move
pub trait Agent<S: GameState> {
    /// The agent's display name
    fn name(&self) -> &str;

    /// The side the agent plays
    fn role(&self) -> PlayerId;

    /// Chooses a move for the given position
    ///
    /// Returns None when the agent has nothing to play; what that means
    /// (pass, resignation, loss) is up to the caller.
    fn take_action(&mut self, state: &S) -> Option<Move>;
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    }
}

/// Agent that picks its moves with Monte Carlo Tree Search
pub struct MctsAgent {
    config: AgentConfig,
    search_config: MCTSConfig,
    rng: ChaCha20Rng,
}

impl MctsAgent {
    /// Creates an agent with default search settings
    ///
    /// # Errors
    ///
    /// Fails if the agent config does not validate.
    pub fn new(config: AgentConfig) -> Result<Self> {
        let search_config = MCTSConfig::default().with_max_iterations(config.iterations);
        Self::with_search_config(config, search_config)
    }

    /// Creates an agent with explicit search settings
    ///
    /// The iteration budget always comes from `config.iterations`.
    ///
    /// # Errors
    ///
    /// Fails if either config does not validate.
    pub fn with_search_config(config: AgentConfig, search_config: MCTSConfig) -> Result<Self> {
        config.validate()?;
        search_config.validate()?;

        info!(
            "agent {} plays {} with {} iterations per move (seed {:?})",
            config.name, config.role, config.iterations, config.seed
        );

        Ok(MctsAgent {
            rng: seeded_rng(config.seed),
            search_config: search_config.with_max_iterations(config.iterations),
            config,
        })
    }

    /// Parses `key=value` arguments and creates the agent
    ///
    /// ```
    /// use nogo_mcts::{agent::{Agent, MctsAgent}, nogo::NoGoBoard, PlayerId};
    ///
    /// let agent = MctsAgent::from_args("name=tester role=white seed=3 N=50").unwrap();
    /// assert_eq!(Agent::<NoGoBoard>::role(&agent), PlayerId::Second);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`AgentConfig`]'s `FromStr` implementation.
    pub fn from_args(args: &str) -> Result<Self> {
        Self::new(args.parse()?)
    }

    /// Returns the agent's configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

impl<S: GameState + 'static> Agent<S> for MctsAgent {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn role(&self) -> PlayerId {
        self.config.role
    }

    fn take_action(&mut self, state: &S) -> Option<Move> {
        if state.current_player() != self.config.role {
            warn!(
                "agent {} ({}) asked to move for {}",
                self.config.name,
                self.config.role,
                state.current_player()
            );
        }

        let mut mcts = MCTS::new(state.clone(), self.search_config.clone());
        mcts.run(self.config.iterations, &mut self.rng)
    }
}

/// Agent that plays a uniformly random legal move
pub struct RandomAgent {
    config: AgentConfig,
    rng: ChaCha20Rng,
}

impl RandomAgent {
    /// Creates a random agent
    ///
    /// # Errors
    ///
    /// Fails if the config does not validate.
    pub fn new(config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(RandomAgent {
            rng: seeded_rng(config.seed),
            config,
        })
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn role(&self) -> PlayerId {
        self.config.role
    }

    fn take_action(&mut self, state: &S) -> Option<Move> {
        utils::shuffled_moves(state.action_space(), &mut self.rng)
            .into_iter()
            .find(|&index| state.apply(index).is_ok())
            .map(|index| Move::new(index, state.current_player()))
    }
}
