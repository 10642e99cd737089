use crate::battle::commands::BattleCommand;
use crate::battle::state::{BattleEvent, BattleOutcome, BattleSession, Side, TurnRng};
use crate::critter::CritterInst;
use crate::player::Player;
use schema::Move;
use std::time::Duration;

/// Experience announced after a victory. Levels never change; the reward is
/// narrative only.
pub const VICTORY_EXP: u32 = 10;

/// Draw the damage variability, uniform in {-1, 0, 1}.
pub fn roll_damage_variance(rng: &mut TurnRng) -> i32 {
    rng.next_below(3, "damage variance") as i32 - 1
}

/// Damage formula shared by every attack:
/// `max(1, power + atk - floor(def / 2) + variance)`.
///
/// Accuracy is never consulted; every move connects.
pub fn calculate_damage(
    attacker: &CritterInst,
    defender: &CritterInst,
    move_used: &Move,
    variance: i32,
) -> u16 {
    let base = i32::from(move_used.power()) + i32::from(attacker.atk) - i32::from(defender.def / 2);
    (base + variance).clamp(1, i32::from(u16::MAX)) as u16
}

/// Roll variance and compute damage in one step.
pub fn roll_damage(
    attacker: &CritterInst,
    defender: &CritterInst,
    move_used: &Move,
    rng: &mut TurnRng,
) -> u16 {
    let variance = roll_damage_variance(rng);
    calculate_damage(attacker, defender, move_used, variance)
}

/// Commands for the active critter attacking the wild.
///
/// A fainted wild ends the battle in victory; otherwise the wild's
/// counter-turn is queued.
pub fn calculate_attack_commands(
    session: &BattleSession,
    player: &Player,
    move_index: usize,
    follow_up_delay: Duration,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let mut commands = Vec::new();

    let Some(attacker) = player.party.get(session.active_index) else {
        return commands;
    };
    let Some(move_used) = attacker.get_move(move_index) else {
        return commands;
    };
    let wild = &session.wild;

    let damage = roll_damage(attacker, wild, move_used, rng);
    let remaining_hp = wild.hp().saturating_sub(damage);

    commands.push(BattleCommand::EmitEvent(BattleEvent::MoveUsed {
        side: Side::Player,
        attacker: attacker.name.clone(),
        move_name: move_used.name().to_string(),
        damage,
        remaining_hp,
    }));
    commands.push(BattleCommand::DealDamage {
        target: Side::Wild,
        amount: damage,
    });

    if remaining_hp == 0 {
        commands.push(BattleCommand::EmitEvent(BattleEvent::CritterFainted {
            side: Side::Wild,
            name: wild.name.clone(),
        }));
        commands.push(BattleCommand::ApplyVictoryCost);
        commands.push(BattleCommand::EmitEvent(BattleEvent::VictoryReward {
            name: attacker.name.clone(),
            exp: VICTORY_EXP,
        }));
        commands.push(BattleCommand::EndBattle(BattleOutcome::Victory));
    } else {
        commands.push(BattleCommand::QueueWildTurn {
            delay: follow_up_delay,
        });
    }

    commands
}

/// Commands for the wild's counter-turn: a uniformly chosen move against the
/// active critter, then succession or defeat if it faints.
pub fn calculate_wild_turn_commands(
    session: &BattleSession,
    player: &Player,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let mut commands = Vec::new();

    let wild = &session.wild;
    let Some(defender) = player.party.get(session.active_index) else {
        return commands;
    };
    if wild.moves.is_empty() {
        return commands;
    }

    let move_used = &wild.moves[rng.pick_index(wild.moves.len(), "wild move choice")];
    let damage = roll_damage(wild, defender, move_used, rng);
    let remaining_hp = defender.hp().saturating_sub(damage);

    commands.push(BattleCommand::EmitEvent(BattleEvent::MoveUsed {
        side: Side::Wild,
        attacker: wild.name.clone(),
        move_name: move_used.name().to_string(),
        damage,
        remaining_hp,
    }));
    commands.push(BattleCommand::DealDamage {
        target: Side::Player,
        amount: damage,
    });

    if remaining_hp == 0 {
        commands.push(BattleCommand::EmitEvent(BattleEvent::CritterFainted {
            side: Side::Player,
            name: defender.name.clone(),
        }));

        // The active critter is about to be at 0 HP, so skip it when looking
        // for a replacement.
        let replacement = player
            .party
            .iter()
            .enumerate()
            .find(|(index, critter)| *index != session.active_index && !critter.is_fainted());

        match replacement {
            Some((party_index, next)) => {
                commands.push(BattleCommand::SwitchActive { party_index });
                commands.push(BattleCommand::EmitEvent(BattleEvent::CritterSentOut {
                    party_index,
                    name: next.name.clone(),
                }));
            }
            None => {
                commands.push(BattleCommand::EmitEvent(BattleEvent::PlayerDefeated));
                commands.push(BattleCommand::EndBattle(BattleOutcome::Defeated));
            }
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCritterBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::Species;

    fn session_against(wild: CritterInst) -> BattleSession {
        BattleSession {
            wild,
            active_index: 0,
        }
    }

    #[rstest]
    #[case(0, 14)]
    #[case(1, 15)]
    #[case(2, 16)]
    fn test_ember_against_emberpup(#[case] roll: u32, #[case] expected: u16) {
        // power 9 + atk 8 - floor(4 / 2) = 15, then -1..=1
        let attacker = TestCritterBuilder::new(Species::Emberpup).build();
        let defender = TestCritterBuilder::new(Species::Emberpup).build();
        let ember = Move::new("Ember", 9);
        let mut rng = TurnRng::new_for_test(vec![roll]);

        assert_eq!(roll_damage(&attacker, &defender, &ember, &mut rng), expected);
    }

    #[test]
    fn test_damage_never_below_one() {
        let attacker = TestCritterBuilder::new(Species::Aquapup).with_atk(1).build();
        let defender = TestCritterBuilder::new(Species::Leaflet).with_def(200).build();
        let splash = Move::new("Splash", 0);

        for variance in -1..=1 {
            assert_eq!(calculate_damage(&attacker, &defender, &splash, variance), 1);
        }
    }

    #[test]
    fn test_accuracy_is_ignored() {
        let attacker = TestCritterBuilder::new(Species::Emberpup).build();
        let defender = TestCritterBuilder::new(Species::Emberpup).build();
        let wild_swing = Move::with_accuracy("Wild Swing", 9, 0);
        assert_eq!(calculate_damage(&attacker, &defender, &wild_swing, 0), 15);
    }

    #[test]
    fn test_attack_that_faints_wild_ends_in_victory() {
        let mut player = Player::new("Tester");
        player.add_critter(&TestCritterBuilder::new(Species::Emberpup).build());
        let session = session_against(TestCritterBuilder::new(Species::Leaflet).with_hp(3).build());
        let mut rng = TurnRng::new_for_test(vec![1]);

        let commands =
            calculate_attack_commands(&session, &player, 1, Duration::from_millis(350), &mut rng);

        assert_eq!(
            commands.last(),
            Some(&BattleCommand::EndBattle(BattleOutcome::Victory))
        );
        assert!(commands.contains(&BattleCommand::ApplyVictoryCost));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, BattleCommand::QueueWildTurn { .. })));
    }

    #[test]
    fn test_attack_that_does_not_faint_queues_wild_turn() {
        let mut player = Player::new("Tester");
        player.add_critter(&TestCritterBuilder::new(Species::Emberpup).build());
        let session = session_against(TestCritterBuilder::new(Species::Leaflet).build());
        let mut rng = TurnRng::new_for_test(vec![1]);

        let commands =
            calculate_attack_commands(&session, &player, 0, Duration::from_millis(350), &mut rng);

        assert_eq!(
            commands.last(),
            Some(&BattleCommand::QueueWildTurn {
                delay: Duration::from_millis(350)
            })
        );
    }

    #[test]
    fn test_wild_turn_sends_out_next_available() {
        let mut player = Player::new("Tester");
        player.add_critter(&TestCritterBuilder::new(Species::Emberpup).with_hp(1).build());
        player.add_critter(&TestCritterBuilder::new(Species::Leaflet).with_hp(0).build());
        player.add_critter(&TestCritterBuilder::new(Species::Aquapup).build());
        let session = session_against(TestCritterBuilder::new(Species::Aquapup).build());
        let mut rng = TurnRng::new_for_test(vec![1, 1]);

        let commands = calculate_wild_turn_commands(&session, &player, &mut rng);

        assert!(commands.contains(&BattleCommand::SwitchActive { party_index: 2 }));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, BattleCommand::EndBattle(_))));
    }

    #[test]
    fn test_wild_turn_with_no_replacement_is_defeat() {
        let mut player = Player::new("Tester");
        player.add_critter(&TestCritterBuilder::new(Species::Emberpup).with_hp(1).build());
        let session = session_against(TestCritterBuilder::new(Species::Aquapup).build());
        let mut rng = TurnRng::new_for_test(vec![0, 0]);

        let commands = calculate_wild_turn_commands(&session, &player, &mut rng);

        assert_eq!(
            commands.last(),
            Some(&BattleCommand::EndBattle(BattleOutcome::Defeated))
        );
    }
}
