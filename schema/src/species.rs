use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Identifiers for every archetype in the roster catalog.
///
/// The string form (`"emberpup"`, `"leaflet"`, ...) is the stable id written
/// into save records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    EnumCount,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Emberpup,
    Leaflet,
    Aquapup,
}

impl Species {
    /// The persisted identifier for this species.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Resolve a persisted identifier back into a species.
    pub fn from_id(id: &str) -> Option<Species> {
        id.parse().ok()
    }
}
