use crate::battle::engine::{BattleEngine, ExecutionResult};
use crate::battle::state::{BattleOutcome, BattleStatus, EventBus, TurnRng};
use crate::config::GameConfig;
use crate::critter::CritterInst;
use crate::encounter::generate_wild_encounter;
use crate::errors::{BattleStateError, GameResult};
use crate::persistence::{self, FileStore, SaveStore};
use crate::player::{Player, PlayerAction};

/// What the view is told after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameNotification {
    /// One narrative line for the log
    Log(String),
    /// Party contents or HP changed
    PartyChanged,
    /// A battle started, progressed or ended
    BattleStateChanged,
}

/// Read-only snapshot of the battle screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleView {
    pub wild: CritterInst,
    pub active: CritterInst,
    pub active_index: usize,
    /// Move buttons for the active critter, "Name (power)"
    pub moves: Vec<String>,
}

/// The game core as seen by a presentation layer.
///
/// Owns the player, the battle engine and the save store. Every command
/// queues notifications for the view to drain; engine errors that a player
/// can trigger through normal play turn into log lines.
pub struct Game<S: SaveStore = FileStore> {
    player: Player,
    engine: BattleEngine,
    store: S,
    config: GameConfig,
    rng: TurnRng,
    bus: EventBus,
    notifications: Vec<GameNotification>,
}

impl Game<FileStore> {
    /// Open the save directory from `config` and load or create the player.
    pub fn from_config(config: GameConfig) -> GameResult<Self> {
        let store = FileStore::new(config.save_dir.clone());
        Self::new(config, store, TurnRng::new_random())
    }
}

impl<S: SaveStore> Game<S> {
    /// Load the player from `store`, falling back to a fresh starter party.
    pub fn new(config: GameConfig, store: S, rng: TurnRng) -> GameResult<Self> {
        let player = persistence::load_or_default(&store, &config)?;
        Ok(Self::with_player(player, config, store, rng))
    }

    pub fn with_player(player: Player, config: GameConfig, store: S, rng: TurnRng) -> Self {
        Game {
            player,
            engine: BattleEngine::new(config.pacing),
            store,
            config,
            rng,
            bus: EventBus::new(),
            notifications: Vec::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn party(&self) -> &[CritterInst] {
        &self.player.party
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> BattleStatus {
        self.engine.status()
    }

    pub fn last_outcome(&self) -> Option<BattleOutcome> {
        self.engine.last_outcome()
    }

    pub fn battle_view(&self) -> Option<BattleView> {
        let session = self.engine.session()?;
        let active = self.engine.active_critter(&self.player)?;
        Some(BattleView {
            wild: session.wild.clone(),
            active: active.clone(),
            active_index: session.active_index,
            moves: active.moves.iter().map(|m| m.to_string()).collect(),
        })
    }

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<GameNotification> {
        std::mem::take(&mut self.notifications)
    }

    /// Meet a random wild critter and start a battle with it.
    ///
    /// A fully fainted party is not an error: the encounter is announced and
    /// the refusal is logged.
    pub fn explore(&mut self) -> GameResult<()> {
        if self.engine.is_battle_active() {
            return Err(BattleStateError::BattleInProgress.into());
        }

        let wild = generate_wild_encounter(&mut self.rng)?;
        let started = self.engine.start(&self.player, wild, &mut self.bus);
        self.flush_events();

        match started {
            Ok(()) => {
                self.notifications.push(GameNotification::BattleStateChanged);
                Ok(())
            }
            Err(BattleStateError::NoUsableCritter) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn heal_all(&mut self) {
        self.player.heal_all();
        self.log("All party critters healed.");
        self.notifications.push(GameNotification::PartyChanged);
    }

    /// Write the player to the store. A failed write is logged, never fatal.
    pub fn save(&mut self) {
        match persistence::save(&self.player, &mut self.store, &self.config.save_key) {
            Ok(()) => self.log("Game saved."),
            Err(err) => {
                tracing::error!(error = %err, key = %self.config.save_key, "save failed");
                self.log(format!("Could not save the game: {}", err));
            }
        }
    }

    pub fn use_move(&mut self, move_index: usize) -> GameResult<ExecutionResult> {
        self.submit(PlayerAction::UseMove { move_index })
    }

    pub fn attempt_catch(&mut self) -> GameResult<ExecutionResult> {
        self.submit(PlayerAction::AttemptCatch)
    }

    pub fn attempt_flee(&mut self) -> GameResult<ExecutionResult> {
        self.submit(PlayerAction::AttemptFlee)
    }

    /// Run the wild counter-turn left pending by the last action.
    pub fn resolve_follow_up(&mut self) -> GameResult<ExecutionResult> {
        let party_before = self.player.party.clone();
        let result = self
            .engine
            .resolve_follow_up(&mut self.player, &mut self.rng, &mut self.bus)?;
        self.after_step(&party_before);
        Ok(result)
    }

    fn submit(&mut self, action: PlayerAction) -> GameResult<ExecutionResult> {
        let party_before = self.player.party.clone();
        let result = self
            .engine
            .submit(&mut self.player, action, &mut self.rng, &mut self.bus)?;
        self.after_step(&party_before);
        Ok(result)
    }

    fn after_step(&mut self, party_before: &[CritterInst]) {
        self.flush_events();
        if self.player.party != party_before {
            self.notifications.push(GameNotification::PartyChanged);
        }
        self.notifications.push(GameNotification::BattleStateChanged);
    }

    fn flush_events(&mut self) {
        for event in self.bus.drain() {
            if let Some(line) = event.format() {
                self.notifications.push(GameNotification::Log(line));
            }
        }
    }

    fn log(&mut self, line: impl Into<String>) {
        self.notifications.push(GameNotification::Log(line.into()));
    }
}
