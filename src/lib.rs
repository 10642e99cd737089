// In: src/lib.rs

//! Critter Catchers Game Core
//!
//! A small turn-based critter collection game: explore, battle wild critters
//! with simple move-based combat, capture them into a persistent party.
//! The crate holds the rules only; a presentation layer drives it through
//! the `Game` facade and renders its notifications.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod config;
pub mod critter;
pub mod encounter;
pub mod errors;
pub mod game;
pub mod persistence;
pub mod player;
pub mod species;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `critter-catchers` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared data definitions.
pub use schema::{
    // Catalog
    CritterTemplate,
    Move,
    Species,
    // Persisted records
    CritterRecord,
    MoveRecord,
    PlayerRecord,
    SaveRecord,
};

// --- From this crate's modules (`src/`) ---

// Battle engine and its state.
pub use battle::engine::{BattleEngine, ExecutionResult};
pub use battle::state::{BattleEvent, BattleOutcome, BattleStatus, EventBus, TurnRng};

// Core runtime types.
pub use critter::CritterInst;
pub use player::{Player, PlayerAction};

// Presentation boundary.
pub use game::{BattleView, Game, GameNotification};

// Data access, encounters and persistence.
pub use config::{GameConfig, PacingConfig};
pub use encounter::generate_wild_encounter;
pub use persistence::{FileStore, MemoryStore, SaveStore};
pub use species::{all_templates, get_template};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleStateError, GameError, GameResult, PersistenceError, PersistenceResult,
    SpeciesDataError, SpeciesDataResult,
};
