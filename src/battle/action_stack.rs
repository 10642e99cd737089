use std::collections::VecDeque;
use std::time::Duration;

use crate::player::PlayerAction;

/// Internal action types for the action stack
/// These represent atomic actions that can be executed during battle resolution
#[derive(Debug, Clone, PartialEq)]
pub enum BattleAction {
    /// Active critter attacks the wild with the move at `move_index`
    PlayerAttack { move_index: usize },

    /// Player throws a Capture Orb
    Catch,

    /// Player tries to run away
    Flee,

    /// The wild's counter-turn. `delay` is the presentation pause a paced
    /// caller should wait before resolving it.
    WildTurn { delay: Duration },
}

impl From<&PlayerAction> for BattleAction {
    fn from(action: &PlayerAction) -> Self {
        match action {
            PlayerAction::UseMove { move_index } => BattleAction::PlayerAttack {
                move_index: *move_index,
            },
            PlayerAction::AttemptCatch => BattleAction::Catch,
            PlayerAction::AttemptFlee => BattleAction::Flee,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionStack {
    actions: VecDeque<BattleAction>,
}

impl ActionStack {
    /// Creates a new, empty ActionStack.
    pub fn new() -> Self {
        Self {
            actions: VecDeque::new(),
        }
    }

    /// Adds an action to the end of the execution queue.
    pub fn push_back(&mut self, action: BattleAction) {
        self.actions.push_back(action);
    }

    /// Removes and returns the next action to be executed from the front of the queue.
    pub fn pop_front(&mut self) -> Option<BattleAction> {
        self.actions.pop_front()
    }

    /// The next action without removing it.
    pub fn peek(&self) -> Option<&BattleAction> {
        self.actions.front()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Drop every queued action. Used when a battle ends.
    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
