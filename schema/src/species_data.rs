use crate::{Move, Species};
use serde::{Deserialize, Serialize};

/// A read-only archetype from the roster catalog.
///
/// Templates are generation sources only. Battles always run on instances
/// cloned from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritterTemplate {
    pub species: Species,
    pub name: String,
    pub glyph: String,
    pub max_hp: u16,
    pub atk: u16,
    pub def: u16,
    pub moves: Vec<Move>,
}

impl CritterTemplate {
    pub fn id(&self) -> &'static str {
        self.species.id()
    }
}
