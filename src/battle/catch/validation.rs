use crate::battle::state::BattleSession;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum CatchError {
    /// No battle is in progress, so there is nothing to catch
    #[error("there is no wild critter to catch")]
    NoTargetCritter,
    /// Target critter is already fainted
    #[error("{name} is fainted and cannot be caught")]
    TargetFainted { name: String },
}

/// Validate that a catch attempt can be made against the current wild.
pub fn can_attempt_catch(session: Option<&BattleSession>) -> Result<(), CatchError> {
    match session {
        Some(session) if session.wild.is_fainted() => Err(CatchError::TargetFainted {
            name: session.wild.name.clone(),
        }),
        Some(_) => Ok(()),
        None => Err(CatchError::NoTargetCritter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::state::{BattleStatus, TurnRng};
    use crate::battle::tests::common::{create_test_player, start_test_battle, TestCritterBuilder};
    use crate::errors::{ActionError, GameError};
    use crate::player::PlayerAction;
    use schema::Species;

    #[test]
    fn test_no_session_has_no_target() {
        assert_eq!(can_attempt_catch(None), Err(CatchError::NoTargetCritter));
    }

    #[test]
    fn test_healthy_wild_can_be_targeted() {
        let session = BattleSession {
            wild: TestCritterBuilder::new(Species::Aquapup).build(),
            active_index: 0,
        };
        assert_eq!(can_attempt_catch(Some(&session)), Ok(()));
    }

    #[test]
    fn test_fainted_wild_cannot_be_targeted() {
        let session = BattleSession {
            wild: TestCritterBuilder::new(Species::Aquapup).with_hp(0).build(),
            active_index: 0,
        };
        assert_eq!(
            can_attempt_catch(Some(&session)),
            Err(CatchError::TargetFainted {
                name: "Aquapup".to_string()
            })
        );
    }

    #[test]
    fn test_engine_rejects_catch_on_fainted_wild() {
        let mut player = create_test_player(vec![TestCritterBuilder::new(Species::Emberpup).build()]);
        let (mut engine, mut bus) = start_test_battle(
            &player,
            TestCritterBuilder::new(Species::Leaflet).with_hp(0).build(),
        );
        bus.drain();
        // Rejected before any roll is drawn
        let mut rng = TurnRng::new_for_test(vec![]);

        let result = engine.execute(&mut player, PlayerAction::AttemptCatch, &mut rng, &mut bus);

        match result {
            Err(GameError::Action(ActionError::CatchNotAllowed(reason))) => assert_eq!(
                reason,
                CatchError::TargetFainted {
                    name: "Leaflet".to_string()
                }
            ),
            other => panic!("expected CatchNotAllowed, got {:?}", other),
        }
        assert!(bus.is_empty());
        assert_eq!(engine.status(), BattleStatus::InProgress);
        assert_eq!(engine.pending_follow_up(), None);
        assert_eq!(player.party.len(), 1);
    }
}
