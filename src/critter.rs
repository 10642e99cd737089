use schema::{CritterTemplate, Move};
use serde::Serialize;
use std::fmt;

/// A live creature: a party member or a wild opponent.
///
/// `hp` is unsigned and every damage path clamps at zero, so `0 <= hp <= max_hp`
/// holds for the life of the instance. Cloning is a full structural copy,
/// moves included.
/// Saves are read back through `CritterRecord`, never into this type directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CritterInst {
    pub id: String,
    pub name: String,
    pub glyph: String,
    pub max_hp: u16,
    hp: u16,
    pub atk: u16,
    pub def: u16,
    pub moves: Vec<Move>,
    pub level: u8,
}

impl CritterInst {
    /// Create an instance from plain attributes. `hp` starts at `max_hp` and
    /// `level` at 1; no other validation is performed.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        glyph: impl Into<String>,
        max_hp: u16,
        atk: u16,
        def: u16,
        moves: Vec<Move>,
    ) -> Self {
        CritterInst {
            id: id.into(),
            name: name.into(),
            glyph: glyph.into(),
            max_hp,
            hp: max_hp,
            atk,
            def,
            moves,
            level: 1,
        }
    }

    /// Spawn a fresh, full-health, level 1 instance of a catalog template.
    pub fn from_template(template: &CritterTemplate) -> Self {
        Self::new(
            template.id(),
            template.name.clone(),
            template.glyph.clone(),
            template.max_hp,
            template.atk,
            template.def,
            template.moves.clone(),
        )
    }

    pub fn hp(&self) -> u16 {
        self.hp
    }

    /// Set current HP, capped at `max_hp`.
    pub fn set_hp(&mut self, hp: u16) {
        self.hp = hp.min(self.max_hp);
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Refill HP to `max_hp`.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
    }

    /// Subtract `amount` from HP, stopping at zero. Returns true if this
    /// critter is fainted afterwards.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_fainted()
    }

    /// Residual cost of winning a battle: HP drops to 90%, rounded down, but
    /// never below 1.
    pub fn apply_victory_cost(&mut self) {
        let reduced = (u32::from(self.hp) * 9 / 10) as u16;
        self.hp = reduced.max(1).min(self.max_hp);
    }

    pub fn get_move(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }
}

impl fmt::Display for CritterInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph, self.name)?;
        if self.is_fainted() {
            write!(f, " (Fainted)")?;
        }
        write!(f, " {}/{} HP • Lv.{}", self.hp, self.max_hp, self.level)
    }
}
