use crate::battle::state::TurnRng;
use crate::critter::CritterInst;

/// Lowest capture chance, in percent, no matter how healthy the target is.
pub const MIN_CATCH_RATE: u8 = 10;

/// Capture chance, in percent, when the target is at 0 HP.
pub const CATCH_RATE_COEFFICIENT: u32 = 60;

/// Capture chance in percent: `max(10, floor(60 * (1 - hp / max_hp)))`.
///
/// There is no upper clamp; the coefficient already bounds the result at 60.
pub fn calculate_catch_rate(target: &CritterInst) -> u8 {
    if target.max_hp == 0 {
        return MIN_CATCH_RATE;
    }
    let max_hp = u32::from(target.max_hp);
    let missing_hp = max_hp - u32::from(target.hp());
    // floor(60 * missing / max) in integers avoids float rounding at the edges
    let rate = (CATCH_RATE_COEFFICIENT * missing_hp / max_hp) as u8;
    rate.max(MIN_CATCH_RATE)
}

/// Roll for catch success using the calculated catch rate
/// Returns true if the catch succeeds
pub fn roll_catch_success(catch_rate: u8, rng: &mut TurnRng) -> bool {
    let roll = rng.percent_roll("catch roll");
    roll < u32::from(catch_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCritterBuilder;
    use schema::Species;

    fn leaflet_at(hp: u16) -> CritterInst {
        TestCritterBuilder::new(Species::Leaflet).with_hp(hp).build()
    }

    #[test]
    fn test_fainted_target_gives_max_rate() {
        let target = TestCritterBuilder::new(Species::Emberpup).with_hp(0).build();
        assert_eq!(calculate_catch_rate(&target), 60);
    }

    #[test]
    fn test_full_hp_target_gives_floor_rate() {
        let target = TestCritterBuilder::new(Species::Emberpup).build();
        assert_eq!(target.hp(), 28);
        assert_eq!(calculate_catch_rate(&target), 10);
    }

    #[test]
    fn test_intermediate_rates() {
        // 60 * (1 - 16/32) = 30
        assert_eq!(calculate_catch_rate(&leaflet_at(16)), 30);
        // 60 * (1 - 8/32) = 45
        assert_eq!(calculate_catch_rate(&leaflet_at(8)), 45);
        // 60 * (1 - 28/32) = 7.5 -> floored to 7, raised to the minimum
        assert_eq!(calculate_catch_rate(&leaflet_at(28)), 10);
        // 60 * (1 - 1/32) = 58.125
        assert_eq!(calculate_catch_rate(&leaflet_at(1)), 58);
    }

    #[test]
    fn test_rate_is_monotonic_and_bounded() {
        let mut previous = 0;
        for hp in (0..=32).rev() {
            let rate = calculate_catch_rate(&leaflet_at(hp));
            assert!(rate >= MIN_CATCH_RATE);
            assert!(rate <= 60);
            assert!(rate >= previous, "rate dropped at hp {}", hp);
            previous = rate;
        }
    }

    #[test]
    fn test_catch_success_rolls() {
        let mut rng = TurnRng::new_for_test(vec![9, 10, 59]);

        // Roll of 9 succeeds at 10%
        assert!(roll_catch_success(10, &mut rng));

        // Roll of 10 fails at 10%
        assert!(!roll_catch_success(10, &mut rng));

        // Roll of 59 succeeds at 60%
        assert!(roll_catch_success(60, &mut rng));
    }
}
