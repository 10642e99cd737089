use crate::critter::CritterInst;
use crate::errors::SpeciesDataResult;
use crate::species::get_template;
use schema::Species;
use serde::{Deserialize, Serialize};

/// Name given to a fresh player when nothing was loaded.
pub const DEFAULT_PLAYER_NAME: &str = "Ace";

/// Species handed out when a player has no critters yet.
pub const DEFAULT_STARTERS: [Species; 2] = [Species::Emberpup, Species::Leaflet];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PlayerAction {
    // The index refers to the move's position in the active critter's move list.
    UseMove { move_index: usize },

    AttemptCatch,

    AttemptFlee,
}

/// The trainer and their party. Party order is acquisition order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub party: Vec<CritterInst>,
}

impl Player {
    /// Create a player with an empty party
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            party: Vec::new(),
        }
    }

    /// Create a player holding one fresh copy of each starter species
    pub fn with_starters(name: impl Into<String>, starters: &[Species]) -> SpeciesDataResult<Self> {
        let mut player = Player::new(name);
        player.add_starters(starters)?;
        Ok(player)
    }

    /// Append fresh copies of the given starter species to the party
    pub fn add_starters(&mut self, starters: &[Species]) -> SpeciesDataResult<()> {
        for species in starters {
            let template = get_template(*species)?;
            self.party.push(CritterInst::from_template(template));
        }
        Ok(())
    }

    /// Append a copy of `critter` to the party, current HP included.
    pub fn add_critter(&mut self, critter: &CritterInst) {
        self.party.push(critter.clone());
    }

    /// The first party member that can still battle
    pub fn first_available(&self) -> Option<&CritterInst> {
        self.party.iter().find(|critter| !critter.is_fainted())
    }

    /// Party index of the first member that can still battle
    pub fn first_available_index(&self) -> Option<usize> {
        self.party.iter().position(|critter| !critter.is_fainted())
    }

    /// Restore every party member to full HP
    pub fn heal_all(&mut self) {
        for critter in &mut self.party {
            critter.restore();
        }
    }

    /// One display line per party member, in party order
    pub fn party_summary(&self) -> Vec<String> {
        self.party.iter().map(|critter| critter.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn starter_player() -> Player {
        Player::with_starters(DEFAULT_PLAYER_NAME, &DEFAULT_STARTERS).unwrap()
    }

    #[test]
    fn test_with_starters_builds_default_party() {
        let player = starter_player();
        assert_eq!(player.name, "Ace");
        let ids: Vec<&str> = player.party.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["emberpup", "leaflet"]);
        assert!(player.party.iter().all(|c| c.hp() == c.max_hp));
    }

    #[test]
    fn test_add_critter_copies_current_hp() {
        let mut player = Player::new("Trainer");
        let mut wild = CritterInst::from_template(get_template(Species::Aquapup).unwrap());
        wild.take_damage(10);

        player.add_critter(&wild);
        wild.take_damage(10);

        assert_eq!(player.party.len(), 1);
        assert_eq!(player.party[0].hp(), 16);
        assert_eq!(wild.hp(), 6);
    }

    #[test]
    fn test_first_available_skips_fainted() {
        let mut player = starter_player();
        assert_eq!(player.first_available_index(), Some(0));

        player.party[0].take_damage(100);
        assert_eq!(player.first_available_index(), Some(1));
        assert_eq!(player.first_available().map(|c| c.id.as_str()), Some("leaflet"));

        player.party[1].take_damage(100);
        assert!(player.first_available().is_none());
        assert_eq!(player.first_available_index(), None);
    }

    #[test]
    fn test_first_available_on_empty_party() {
        let player = Player::new("Nobody");
        assert!(player.first_available().is_none());
    }

    #[test]
    fn test_heal_all_restores_everyone() {
        let mut player = starter_player();
        player.party[0].take_damage(100);
        player.party[1].take_damage(3);

        player.heal_all();

        assert!(player.party.iter().all(|c| c.hp() == c.max_hp));
    }

    #[test]
    fn test_party_summary_lines() {
        let mut player = starter_player();
        player.party[1].take_damage(32);
        assert_eq!(
            player.party_summary(),
            vec![
                "🐶🔥 Emberpup 28/28 HP • Lv.1".to_string(),
                "🐸🍃 Leaflet (Fainted) 0/32 HP • Lv.1".to_string(),
            ]
        );
    }
}
