use crate::errors::{GameError, GameResult};
use crate::player::{DEFAULT_PLAYER_NAME, DEFAULT_STARTERS};
use schema::Species;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Key the save record is stored under.
pub const DEFAULT_SAVE_KEY: &str = "crittercatchers_save_v1";

/// Game settings. Every field has a default, so a config file only needs to
/// list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub save_dir: PathBuf,
    pub save_key: String,
    pub starters: Vec<Species>,
    pub pacing: PacingConfig,
}

/// Presentation pause before the wild counter-turn, per triggering action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub attack_ms: u64,
    pub catch_ms: u64,
    pub flee_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            save_dir: PathBuf::from("saves"),
            save_key: DEFAULT_SAVE_KEY.to_string(),
            starters: DEFAULT_STARTERS.to_vec(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            attack_ms: 350,
            catch_ms: 400,
            flee_ms: 250,
        }
    }
}

impl PacingConfig {
    pub fn attack_delay(&self) -> Duration {
        Duration::from_millis(self.attack_ms)
    }

    pub fn catch_delay(&self) -> Duration {
        Duration::from_millis(self.catch_ms)
    }

    pub fn flee_delay(&self) -> Duration {
        Duration::from_millis(self.flee_ms)
    }
}

impl GameConfig {
    /// Parse a config from RON text.
    pub fn from_ron(source: &str) -> GameResult<Self> {
        ron::from_str(source).map_err(|e| GameError::Config(e.to_string()))
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> GameResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_ron(&content)
    }
}
