use crate::battle::action_stack::{ActionStack, BattleAction};
use crate::battle::state::{BattleEvent, BattleOutcome, BattleSession, EventBus, Side};
use crate::player::Player;
use std::time::Duration;

/// Atomic commands representing final state changes.
///
/// Calculators read the battle and return a list of these; `execute_command`
/// is the only place that mutates the session or the party.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleCommand {
    // Critter modifications
    DealDamage { target: Side, amount: u16 },
    ApplyVictoryCost,
    SwitchActive { party_index: usize },

    // Capture
    CaptureWild,

    // Battle flow
    QueueWildTurn { delay: Duration },
    EndBattle(BattleOutcome),
    EmitEvent(BattleEvent),
}

/// Mutable handles the executor needs to apply a command.
pub struct CommandContext<'a> {
    pub session: &'a mut Option<BattleSession>,
    pub player: &'a mut Player,
    pub action_stack: &'a mut ActionStack,
    pub last_outcome: &'a mut Option<BattleOutcome>,
    pub bus: &'a mut EventBus,
}

/// Apply a single command. Commands that need a live session are no-ops once
/// the battle has ended.
pub fn execute_command(command: BattleCommand, ctx: &mut CommandContext<'_>) {
    match command {
        BattleCommand::EmitEvent(event) => ctx.bus.push(event),
        BattleCommand::DealDamage { target, amount } => {
            let Some(session) = ctx.session.as_mut() else {
                return;
            };
            match target {
                Side::Wild => {
                    session.wild.take_damage(amount);
                }
                Side::Player => {
                    if let Some(active) = ctx.player.party.get_mut(session.active_index) {
                        active.take_damage(amount);
                    }
                }
            }
        }
        BattleCommand::ApplyVictoryCost => {
            if let Some(session) = ctx.session.as_ref() {
                if let Some(active) = ctx.player.party.get_mut(session.active_index) {
                    active.apply_victory_cost();
                }
            }
        }
        BattleCommand::SwitchActive { party_index } => {
            if let Some(session) = ctx.session.as_mut() {
                session.active_index = party_index;
            }
        }
        BattleCommand::CaptureWild => {
            if let Some(session) = ctx.session.as_mut() {
                session.wild.restore();
                ctx.player.add_critter(&session.wild);
            }
        }
        BattleCommand::QueueWildTurn { delay } => {
            if ctx.session.is_some() {
                ctx.action_stack.push_back(BattleAction::WildTurn { delay });
            }
        }
        BattleCommand::EndBattle(outcome) => {
            *ctx.session = None;
            ctx.action_stack.clear();
            *ctx.last_outcome = Some(outcome);
            tracing::debug!(?outcome, "battle ended");
            ctx.bus.push(BattleEvent::BattleEnded { outcome });
        }
    }
}

/// Apply a list of commands in order.
pub fn execute_commands(commands: Vec<BattleCommand>, ctx: &mut CommandContext<'_>) {
    for command in commands {
        execute_command(command, ctx);
    }
}
