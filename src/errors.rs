use crate::battle::catch::CatchError;
use schema::Species;
use thiserror::Error;

/// Main error type for the Critter Catchers game core
#[derive(Debug, Error)]
pub enum GameError {
    /// Error related to species catalog lookup or parsing
    #[error("Species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error related to invalid player actions
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
    /// Error related to saving or loading the game
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Errors related to the roster catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesDataError {
    /// The specified species is not in the catalog
    #[error("Species not found: {0:?}")]
    SpeciesNotFound(Species),
    /// The embedded catalog could not be parsed
    #[error("Malformed species data: {0}")]
    MalformedData(String),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// Every party member is fainted, so a battle cannot start
    #[error("No usable critter in the party")]
    NoUsableCritter,
    /// A battle action was submitted while no battle is in progress
    #[error("No battle in progress")]
    NoActiveBattle,
    /// A battle is already in progress
    #[error("A battle is already in progress")]
    BattleInProgress,
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Move index is out of bounds for the active critter
    #[error("Invalid move index: {0}")]
    InvalidMoveIndex(usize),
    /// The wild counter-turn from the previous action has not been resolved yet
    #[error("A wild counter-turn is still pending")]
    FollowUpPending,
    /// There is no pending wild counter-turn to resolve
    #[error("No wild counter-turn is pending")]
    NoFollowUpPending,
    /// The current wild cannot be targeted by a Capture Orb
    #[error("Catch not allowed: {0}")]
    CatchNotAllowed(CatchError),
}

/// Errors related to the save store
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
    /// The record parsed but describes an impossible critter
    #[error("Invalid save record: {0}")]
    InvalidRecord(String),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;

/// Type alias for Results using PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;
