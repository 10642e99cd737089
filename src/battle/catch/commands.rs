use crate::battle::catch::{calculate_catch_rate, roll_catch_success};
use crate::battle::commands::BattleCommand;
use crate::battle::state::{BattleEvent, BattleOutcome, BattleSession, TurnRng};
use std::time::Duration;

/// Calculate commands for a catch attempt against the session's wild.
/// This follows the Command-Execution pattern by returning commands to be executed
pub fn calculate_catch_commands(
    session: &BattleSession,
    follow_up_delay: Duration,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let mut commands = vec![];
    let target = &session.wild;

    let catch_rate = calculate_catch_rate(target);
    commands.push(BattleCommand::EmitEvent(BattleEvent::CatchAttempted {
        target: target.name.clone(),
        catch_rate,
    }));

    if roll_catch_success(catch_rate, rng) {
        // Captured critters always join at full health
        commands.push(BattleCommand::CaptureWild);
        commands.push(BattleCommand::EmitEvent(BattleEvent::CatchSucceeded {
            name: target.name.clone(),
        }));
        commands.push(BattleCommand::EndBattle(BattleOutcome::Captured));
    } else {
        commands.push(BattleCommand::EmitEvent(BattleEvent::CatchFailed {
            target: target.name.clone(),
        }));
        // The wild gets a free turn
        commands.push(BattleCommand::QueueWildTurn {
            delay: follow_up_delay,
        });
    }

    commands
}
