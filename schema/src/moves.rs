use serde::{Deserialize, Serialize};
use std::fmt;

/// Accuracy given to a move when none is specified.
pub const DEFAULT_ACCURACY: u8 = 100;

fn default_accuracy() -> u8 {
    DEFAULT_ACCURACY
}

/// An attack a critter can use.
///
/// Moves are immutable once constructed: the fields are only readable through
/// accessors. `accuracy` is carried and persisted but never consulted when an
/// attack resolves, every move always connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    name: String,
    power: u16,
    #[serde(default = "default_accuracy")]
    accuracy: u8,
}

impl Move {
    /// Create a move with the default accuracy of 100.
    pub fn new(name: impl Into<String>, power: u16) -> Self {
        Self::with_accuracy(name, power, DEFAULT_ACCURACY)
    }

    pub fn with_accuracy(name: impl Into<String>, power: u16, accuracy: u8) -> Self {
        Move {
            name: name.into(),
            power,
            accuracy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> u16 {
        self.power
    }

    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.power)
    }
}
