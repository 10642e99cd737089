use crate::battle::action_stack::{ActionStack, BattleAction};
use crate::battle::calculators::{calculate_attack_commands, calculate_wild_turn_commands};
use crate::battle::catch::{calculate_catch_commands, can_attempt_catch};
use crate::battle::commands::{execute_commands, CommandContext};
use crate::battle::flee::calculate_flee_commands;
use crate::battle::state::{
    BattleEvent, BattleOutcome, BattleSession, BattleStatus, EventBus, TurnRng,
};
use crate::config::PacingConfig;
use crate::critter::CritterInst;
use crate::errors::{ActionError, BattleStateError, GameResult};
use crate::player::{Player, PlayerAction};
use std::time::Duration;

/// Result of submitting a player action or resolving a follow-up
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub status: BattleStatus,
    /// Set when this step ended the battle
    pub outcome: Option<BattleOutcome>,
    /// Pause before the pending wild counter-turn, if one is queued
    pub follow_up: Option<Duration>,
}

/// Battle state machine for a single encounter at a time.
///
/// Each player action is one synchronous step. Actions that leave the wild
/// standing queue exactly one `WildTurn` follow-up; `execute` drains it
/// immediately, while `submit` leaves it for `resolve_follow_up` so a view
/// can pause in between. No new action is accepted while a follow-up is
/// pending.
#[derive(Debug, Clone)]
pub struct BattleEngine {
    session: Option<BattleSession>,
    action_stack: ActionStack,
    last_outcome: Option<BattleOutcome>,
    pacing: PacingConfig,
}

impl Default for BattleEngine {
    fn default() -> Self {
        Self::new(PacingConfig::default())
    }
}

impl BattleEngine {
    pub fn new(pacing: PacingConfig) -> Self {
        Self {
            session: None,
            action_stack: ActionStack::new(),
            last_outcome: None,
            pacing,
        }
    }

    pub fn status(&self) -> BattleStatus {
        if self.session.is_some() {
            BattleStatus::InProgress
        } else {
            BattleStatus::NoBattle
        }
    }

    pub fn is_battle_active(&self) -> bool {
        self.session.is_some()
    }

    /// Outcome of the most recently finished battle
    pub fn last_outcome(&self) -> Option<BattleOutcome> {
        self.last_outcome
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    pub fn wild(&self) -> Option<&CritterInst> {
        self.session.as_ref().map(|session| &session.wild)
    }

    /// The party member currently fighting
    pub fn active_critter<'a>(&self, player: &'a Player) -> Option<&'a CritterInst> {
        self.session
            .as_ref()
            .and_then(|session| player.party.get(session.active_index))
    }

    /// Pause before the queued wild counter-turn, if any
    pub fn pending_follow_up(&self) -> Option<Duration> {
        match self.action_stack.peek() {
            Some(BattleAction::WildTurn { delay }) => Some(*delay),
            _ => None,
        }
    }

    /// Begin a battle against `wild` with the first non-fainted party member.
    ///
    /// The wild is announced even when no party member can fight.
    pub fn start(
        &mut self,
        player: &Player,
        wild: CritterInst,
        bus: &mut EventBus,
    ) -> Result<(), BattleStateError> {
        if self.session.is_some() {
            return Err(BattleStateError::BattleInProgress);
        }

        bus.push(BattleEvent::WildAppeared {
            name: wild.name.clone(),
        });
        let Some(active_index) = player.first_available_index() else {
            bus.push(BattleEvent::NoUsableCritter);
            return Err(BattleStateError::NoUsableCritter);
        };

        bus.push(BattleEvent::BattleStarted {
            wild: wild.name.clone(),
            active: player.party[active_index].name.clone(),
        });
        tracing::debug!(wild = %wild.id, active_index, "battle started");

        self.action_stack.clear();
        self.session = Some(BattleSession { wild, active_index });
        Ok(())
    }

    /// Run a player action, leaving any wild counter-turn pending.
    pub fn submit(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        rng: &mut TurnRng,
        bus: &mut EventBus,
    ) -> GameResult<ExecutionResult> {
        self.validate_player_action(player, &action)?;

        self.action_stack.push_back(BattleAction::from(&action));
        let outcome = self.step(player, rng, bus);
        Ok(self.result(outcome))
    }

    /// Resolve the pending wild counter-turn. Each queued counter-turn runs
    /// exactly once.
    pub fn resolve_follow_up(
        &mut self,
        player: &mut Player,
        rng: &mut TurnRng,
        bus: &mut EventBus,
    ) -> GameResult<ExecutionResult> {
        if self.session.is_none() {
            return Err(BattleStateError::NoActiveBattle.into());
        }
        if self.pending_follow_up().is_none() {
            return Err(ActionError::NoFollowUpPending.into());
        }

        let outcome = self.step(player, rng, bus);
        Ok(self.result(outcome))
    }

    /// Run a player action and its full consequence chain before returning.
    pub fn execute(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        rng: &mut TurnRng,
        bus: &mut EventBus,
    ) -> GameResult<ExecutionResult> {
        let mut result = self.submit(player, action, rng, bus)?;
        while result.follow_up.is_some() {
            let next = self.resolve_follow_up(player, rng, bus)?;
            result = ExecutionResult {
                outcome: result.outcome.or(next.outcome),
                ..next
            };
        }
        Ok(result)
    }

    fn validate_player_action(&self, player: &Player, action: &PlayerAction) -> GameResult<()> {
        let Some(session) = self.session.as_ref() else {
            return Err(BattleStateError::NoActiveBattle.into());
        };
        if !self.action_stack.is_empty() {
            return Err(ActionError::FollowUpPending.into());
        }

        match action {
            PlayerAction::UseMove { move_index } => {
                let has_move = player
                    .party
                    .get(session.active_index)
                    .and_then(|active| active.get_move(*move_index))
                    .is_some();
                if !has_move {
                    return Err(ActionError::InvalidMoveIndex(*move_index).into());
                }
            }
            PlayerAction::AttemptCatch => {
                can_attempt_catch(Some(session)).map_err(ActionError::CatchNotAllowed)?;
            }
            PlayerAction::AttemptFlee => {}
        }

        Ok(())
    }

    /// Pop and execute the next queued action.
    fn step(
        &mut self,
        player: &mut Player,
        rng: &mut TurnRng,
        bus: &mut EventBus,
    ) -> Option<BattleOutcome> {
        let action = self.action_stack.pop_front()?;
        let session = self.session.as_ref()?;

        let commands = match action {
            BattleAction::PlayerAttack { move_index } => calculate_attack_commands(
                session,
                player,
                move_index,
                self.pacing.attack_delay(),
                rng,
            ),
            BattleAction::Catch => {
                calculate_catch_commands(session, self.pacing.catch_delay(), rng)
            }
            BattleAction::Flee => calculate_flee_commands(self.pacing.flee_delay(), rng),
            BattleAction::WildTurn { .. } => calculate_wild_turn_commands(session, player, rng),
        };

        let mut ctx = CommandContext {
            session: &mut self.session,
            player,
            action_stack: &mut self.action_stack,
            last_outcome: &mut self.last_outcome,
            bus,
        };
        execute_commands(commands, &mut ctx);

        if let Some(delay) = self.pending_follow_up() {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "wild counter-turn queued");
        }

        // The session was live on entry, so losing it means this step ended the battle.
        if self.session.is_none() {
            self.last_outcome
        } else {
            None
        }
    }

    fn result(&self, outcome: Option<BattleOutcome>) -> ExecutionResult {
        ExecutionResult {
            status: self.status(),
            outcome,
            follow_up: self.pending_follow_up(),
        }
    }
}
