use crate::battle::commands::BattleCommand;
use crate::battle::state::{BattleEvent, BattleOutcome, TurnRng};
use std::time::Duration;

/// Chance, in percent, that running away works. Independent of battle state.
pub const FLEE_CHANCE: u32 = 60;

pub fn roll_flee_success(rng: &mut TurnRng) -> bool {
    rng.percent_roll("flee roll") < FLEE_CHANCE
}

/// Commands for a flee attempt. Failure gives the wild a free turn.
pub fn calculate_flee_commands(follow_up_delay: Duration, rng: &mut TurnRng) -> Vec<BattleCommand> {
    if roll_flee_success(rng) {
        vec![
            BattleCommand::EmitEvent(BattleEvent::FleeSucceeded),
            BattleCommand::EndBattle(BattleOutcome::Fled),
        ]
    } else {
        vec![
            BattleCommand::EmitEvent(BattleEvent::FleeFailed),
            BattleCommand::QueueWildTurn {
                delay: follow_up_delay,
            },
        ]
    }
}
