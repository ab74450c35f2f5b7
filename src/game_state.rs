//! Traits defining the rules interface the search consumes.
//!
//! The GameState trait is the only view the MCTS core has of a game. Moves are
//! plain indices into a fixed action space `0..M`; the search probes them
//! through [`GameState::apply`] and treats a rejection as "try the next one".

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The two sides of an alternating-move game
///
/// In NoGo, `First` plays black and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// The side that moves first (black)
    First,
    /// The side that moves second (white)
    Second,
}

impl PlayerId {
    /// Returns the other side
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::First => write!(f, "black"),
            PlayerId::Second => write!(f, "white"),
        }
    }
}

/// A move: an index into the action space plus the player making it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Index into the action space (a cell index for board games)
    pub index: usize,

    /// The player who makes this move
    pub player: PlayerId,
}

impl Move {
    /// Creates a new move
    pub fn new(index: usize, player: PlayerId) -> Self {
        Move { index, player }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.player, self.index)
    }
}

/// Reasons a rules engine can reject a move
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The index does not name any move in the action space
    #[error("move {index} is outside the action space of {space}")]
    OutOfRange { index: usize, space: usize },

    /// The target point already holds a stone
    #[error("point {0} is already occupied")]
    Occupied(usize),

    /// The placed stone's group would have no liberties
    #[error("move {0} is suicide")]
    Suicide(usize),

    /// The move would remove the last liberty of an opponent group
    #[error("move {0} would capture")]
    Capture(usize),

    /// Any other game-specific rule
    #[error("move {0} is forbidden: {1}")]
    Forbidden(usize, &'static str),
}

/// Trait defining the rules interface required for MCTS
///
/// Implementations must be pure: `apply` returns a new position and never
/// mutates `self`, since the search applies many moves to the same position.
///
/// The game is assumed to alternate turns and to end exactly when the player
/// to move has no legal move, in which case that player loses.
///
/// # Example
///
/// ```
/// use nogo_mcts::{GameState, IllegalMove, PlayerId};
///
/// // Players take turns removing one of `left` tokens; no token, no move.
/// #[derive(Clone)]
/// struct Countdown {
///     left: usize,
///     to_move: PlayerId,
/// }
///
/// impl GameState for Countdown {
///     fn action_space(&self) -> usize {
///         1
///     }
///
///     fn apply(&self, index: usize) -> Result<Self, IllegalMove> {
///         if index != 0 || self.left == 0 {
///             return Err(IllegalMove::Forbidden(index, "no tokens left"));
///         }
///         Ok(Countdown { left: self.left - 1, to_move: self.to_move.opponent() })
///     }
///
///     fn current_player(&self) -> PlayerId {
///         self.to_move
///     }
/// }
///
/// let game = Countdown { left: 3, to_move: PlayerId::First };
/// assert_eq!(game.legal_move_count(), 1);
/// assert!(!game.is_terminal());
/// ```
pub trait GameState: Clone + Send + Sync {
    /// Number of candidate move indices; every move is in `0..action_space()`
    fn action_space(&self) -> usize;

    /// Applies the move with the given index, returning the resulting position
    ///
    /// # Errors
    ///
    /// Returns an [`IllegalMove`] when the rules reject the move. The search
    /// treats this as a normal outcome of probing.
    fn apply(&self, index: usize) -> Result<Self, IllegalMove>;

    /// Returns the player whose turn it is
    fn current_player(&self) -> PlayerId;

    /// Counts the legal moves by probing every index in the action space
    ///
    /// Override this when the rules engine can count faster than by trial.
    fn legal_move_count(&self) -> usize {
        (0..self.action_space())
            .filter(|&index| self.apply(index).is_ok())
            .count()
    }

    /// Returns true if the player to move has no legal move
    fn is_terminal(&self) -> bool {
        (0..self.action_space()).all(|index| self.apply(index).is_err())
    }

    /// Plays uniformly random legal moves until a terminal position is reached
    ///
    /// Each ply shuffles the action space and applies the first legal index.
    /// The player left without a move loses, so the other one is returned as
    /// the winner.
    fn random_playout<R: Rng + ?Sized>(&self, rng: &mut R) -> PlayerId
    where
        Self: Sized,
    {
        let mut current = self.clone();
        let mut moves: Vec<usize> = (0..current.action_space()).collect();

        loop {
            moves.shuffle(rng);
            match moves.iter().find_map(|&index| current.apply(index).ok()) {
                Some(next) => current = next,
                None => return current.current_player().opponent(),
            }
        }
    }
}
