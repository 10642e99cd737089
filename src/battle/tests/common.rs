use crate::battle::engine::BattleEngine;
use crate::battle::state::{EventBus, TurnRng};
use crate::critter::CritterInst;
use crate::player::Player;
use crate::species::get_template;
use schema::{Move, Species};

/// A builder for creating test critter instances with common defaults.
///
/// # Example
/// ```ignore
/// let critter = TestCritterBuilder::new(Species::Emberpup)
///     .with_hp(5)
///     .build();
/// ```
pub struct TestCritterBuilder {
    species: Species,
    current_hp: Option<u16>,
    atk: Option<u16>,
    def: Option<u16>,
    level: Option<u8>,
    moves: Option<Vec<Move>>,
}

impl TestCritterBuilder {
    /// Creates a new builder for a given catalog species.
    pub fn new(species: Species) -> Self {
        Self {
            species,
            current_hp: None,
            atk: None,
            def: None,
            level: None,
            moves: None,
        }
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_atk(mut self, atk: u16) -> Self {
        self.atk = Some(atk);
        self
    }

    pub fn with_def(mut self, def: u16) -> Self {
        self.def = Some(def);
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Builds the `CritterInst`.
    pub fn build(self) -> CritterInst {
        let template = match get_template(self.species) {
            Ok(template) => template,
            Err(err) => panic!("Failed to load template for {:?}: {}", self.species, err),
        };

        let mut critter = CritterInst::from_template(template);
        if let Some(atk) = self.atk {
            critter.atk = atk;
        }
        if let Some(def) = self.def {
            critter.def = def;
        }
        if let Some(level) = self.level {
            critter.level = level;
        }
        if let Some(moves) = self.moves {
            critter.moves = moves;
        }
        if let Some(hp) = self.current_hp {
            critter.set_hp(hp);
        }
        critter
    }
}

/// Creates a test player owning the given critters, in order.
pub fn create_test_player(party: Vec<CritterInst>) -> Player {
    let mut player = Player::new("Tester");
    for critter in &party {
        player.add_critter(critter);
    }
    player
}

/// Starts a battle against `wild` and returns the engine and the event bus.
pub fn start_test_battle(player: &Player, wild: CritterInst) -> (BattleEngine, EventBus) {
    let mut engine = BattleEngine::default();
    let mut bus = EventBus::new();
    if let Err(err) = engine.start(player, wild, &mut bus) {
        panic!("Failed to start test battle: {}", err);
    }
    (engine, bus)
}

/// Creates a `TurnRng` instance that always yields 1: zero damage variance,
/// the second move of a two-move list, and a percent roll of 1.
/// Useful for tests where the specific RNG outcome is not important, preventing panics from exhaustion.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![1; 100])
}
