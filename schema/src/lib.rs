// Critter Catchers Schema - Shared type definitions
// This crate holds the plain data that is shared between the game core and the
// data it reads and writes: the species catalog identifiers, move and template
// definitions, and the persisted save record shapes.

// Re-export the main types
pub use moves::*;
pub use save_data::*;
pub use species::*;
pub use species_data::*;

pub mod moves;
pub mod save_data;
pub mod species;
pub mod species_data;
