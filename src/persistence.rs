use crate::config::GameConfig;
use crate::critter::CritterInst;
use crate::errors::{GameResult, PersistenceError, PersistenceResult};
use crate::player::Player;
use schema::{CritterRecord, Move, MoveRecord, PlayerRecord, SaveRecord};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name used when a save carries no usable player name.
pub const FALLBACK_PLAYER_NAME: &str = "Trainer";

/// Key-value storage for encoded saves.
pub trait SaveStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SaveStore for FileStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write beside the target and rename so a crash never leaves half a save.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

fn critter_to_record(critter: &CritterInst) -> CritterRecord {
    CritterRecord {
        id: critter.id.clone(),
        name: critter.name.clone(),
        glyph: critter.glyph.clone(),
        max_hp: critter.max_hp,
        hp: critter.hp(),
        atk: critter.atk,
        def: critter.def,
        level: critter.level,
        moves: critter
            .moves
            .iter()
            .map(|m| MoveRecord {
                name: m.name().to_string(),
                power: m.power(),
                acc: m.accuracy(),
            })
            .collect(),
    }
}

fn critter_from_record(record: CritterRecord) -> CritterInst {
    let moves = record
        .moves
        .into_iter()
        .map(|m| Move::with_accuracy(m.name, m.power, m.acc))
        .collect();
    let mut critter = CritterInst::new(
        record.id,
        record.name,
        record.glyph,
        record.max_hp,
        record.atk,
        record.def,
        moves,
    );
    critter.set_hp(record.hp);
    critter.level = record.level.max(1);
    critter
}

/// Snapshot a player, stamped with the current time.
pub fn to_record(player: &Player) -> SaveRecord {
    SaveRecord {
        player: PlayerRecord {
            name: Some(player.name.clone()),
            party: player.party.iter().map(critter_to_record).collect(),
        },
        timestamp: now_millis(),
    }
}

/// Rebuild a player from a record. HP above `max_hp` is clamped; a missing or
/// empty name becomes "Trainer".
pub fn from_record(record: SaveRecord) -> Player {
    let name = record
        .player
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PLAYER_NAME.to_string());

    let mut player = Player::new(name);
    player.party = record
        .player
        .party
        .into_iter()
        .map(critter_from_record)
        .collect();
    player
}

fn validate_record(record: &SaveRecord) -> PersistenceResult<()> {
    for critter in &record.player.party {
        if critter.max_hp == 0 {
            return Err(PersistenceError::InvalidRecord(format!(
                "'{}' has max HP 0",
                critter.id
            )));
        }
        if critter.moves.is_empty() {
            return Err(PersistenceError::InvalidRecord(format!(
                "'{}' has no moves",
                critter.id
            )));
        }
    }
    Ok(())
}

/// Encode a player as save JSON.
pub fn encode(player: &Player) -> PersistenceResult<String> {
    Ok(serde_json::to_string(&to_record(player))?)
}

/// Decode save JSON, reporting why it could not be used.
pub fn decode(raw: &str) -> PersistenceResult<Player> {
    let record: SaveRecord = serde_json::from_str(raw)?;
    validate_record(&record)?;
    Ok(from_record(record))
}

/// Encode `player` and write it to `store` under `key`.
pub fn save(player: &Player, store: &mut dyn SaveStore, key: &str) -> PersistenceResult<()> {
    let raw = encode(player)?;
    store.set(key, &raw)?;
    tracing::info!(key, party_size = player.party.len(), "game saved");
    Ok(())
}

/// Decode save JSON. Anything unusable yields `None` and a warning.
pub fn load(raw: &str) -> Option<Player> {
    match decode(raw) {
        Ok(player) => Some(player),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable save");
            None
        }
    }
}

/// Load the saved player from `store`, or build a fresh one from `config`.
///
/// A loaded player whose party is empty receives the configured starters.
pub fn load_or_default(store: &dyn SaveStore, config: &GameConfig) -> GameResult<Player> {
    let raw = match store.get(&config.save_key) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, key = %config.save_key, "save store unreadable");
            None
        }
    };

    match raw.as_deref().and_then(load) {
        Some(mut player) => {
            if player.party.is_empty() {
                player.add_starters(&config.starters)?;
            }
            tracing::info!(name = %player.name, party_size = player.party.len(), "game loaded");
            Ok(player)
        }
        None => Ok(Player::with_starters(
            config.player_name.clone(),
            &config.starters,
        )?),
    }
}
