use crate::critter::CritterInst;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Whether a battle is currently running.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    NoBattle,
    InProgress,
}

/// How a battle ended. Once an outcome is reached the session is discarded
/// and the engine is back to `BattleStatus::NoBattle`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Captured,
    Fled,
    Defeated,
}

/// Which side of the field an event or command refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Wild,
}

/// Transient state of one encounter. Never persisted.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BattleSession {
    pub wild: CritterInst,
    /// Index into the player's party of the critter currently fighting.
    pub active_index: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Battle Start
    WildAppeared {
        name: String,
    },
    BattleStarted {
        wild: String,
        active: String,
    },
    NoUsableCritter,

    // Attacks
    MoveUsed {
        side: Side,
        attacker: String,
        move_name: String,
        damage: u16,
        remaining_hp: u16,
    },
    CritterFainted {
        side: Side,
        name: String,
    },
    CritterSentOut {
        party_index: usize,
        name: String,
    },
    VictoryReward {
        name: String,
        exp: u32,
    },

    // Capture
    CatchAttempted {
        target: String,
        catch_rate: u8,
    },
    CatchSucceeded {
        name: String,
    },
    CatchFailed {
        target: String,
    },

    // Flee
    FleeSucceeded,
    FleeFailed,

    // Battle End
    PlayerDefeated,
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into the narrative log line shown to the player.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            // === Battle Start Events ===
            BattleEvent::WildAppeared { name } => Some(format!("A wild {} appeared!", name)),
            BattleEvent::BattleStarted { .. } => None, // Silent - announced by WildAppeared
            BattleEvent::NoUsableCritter => {
                Some("All your critters are fainted. You cannot fight.".to_string())
            }

            // === Attack Events ===
            BattleEvent::MoveUsed {
                side,
                attacker,
                move_name,
                damage,
                ..
            } => Some(format!(
                "{}{} used {} and dealt {} damage!",
                Self::side_prefix(*side),
                attacker,
                move_name,
                damage
            )),
            BattleEvent::CritterFainted { side, name } => {
                Some(format!("{}{} fainted!", Self::side_prefix(*side), name))
            }
            BattleEvent::CritterSentOut { name, .. } => Some(format!("{} enters battle!", name)),
            BattleEvent::VictoryReward { name, exp } => {
                Some(format!("{} gained {} XP (simulated).", name, exp))
            }

            // === Capture Events ===
            BattleEvent::CatchAttempted { catch_rate, .. } => Some(format!(
                "You throw a Capture Orb... (chance {}%)",
                catch_rate
            )),
            BattleEvent::CatchSucceeded { name } => {
                Some(format!("Captured {}! Added to your party.", name))
            }
            BattleEvent::CatchFailed { .. } => Some("The capture failed!".to_string()),

            // === Flee Events ===
            BattleEvent::FleeSucceeded => Some("You successfully ran away.".to_string()),
            BattleEvent::FleeFailed => Some("Could not escape!".to_string()),

            // === Battle End Events ===
            BattleEvent::PlayerDefeated => {
                Some("All party members fainted. You escaped the battle.".to_string())
            }
            BattleEvent::BattleEnded { .. } => None, // Silent - the preceding event says why
        }
    }

    fn side_prefix(side: Side) -> &'static str {
        match side {
            Side::Player => "",
            Side::Wild => "Wild ",
        }
    }
}

/// Event bus for collecting battle events in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Narrative lines for every non-silent event, in order.
    pub fn formatted(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Remove and return every collected event.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum RngSource {
    Scripted { outcomes: Vec<u32>, index: usize },
    Live(StdRng),
}

/// Source of every random draw the game makes.
///
/// Live instances draw uniformly from `rand`. Test instances replay a scripted
/// list of outcomes; each scripted value is reduced modulo the requested bound,
/// so scripts can be written with the exact value a roll should produce.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u32>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    pub fn new_random() -> Self {
        Self {
            source: RngSource::Live(StdRng::from_os_rng()),
        }
    }

    pub fn new_seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Live(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw a uniform integer in `[0, bound)`. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u32, reason: &str) -> u32 {
        match &mut self.source {
            RngSource::Live(rng) => rng.random_range(0..bound),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    // Add the reason to the panic message for better debugging!
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index] % bound;

                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);

                *index += 1;
                outcome
            }
        }
    }

    /// Draw a uniform index into a collection of `len` items.
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        self.next_below(len as u32, reason) as usize
    }

    /// Draw a percentile roll in `[0, 100)`.
    pub fn percent_roll(&mut self, reason: &str) -> u32 {
        self.next_below(100, reason)
    }
}
