use serde::{Deserialize, Serialize};

fn default_level() -> u8 {
    1
}

fn default_acc() -> u8 {
    crate::DEFAULT_ACCURACY
}

/// Top-level persisted record. Field names follow the on-disk JSON layout:
/// `{player: {name, party: [...]}, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub player: PlayerRecord,
    /// Epoch milliseconds at save time.
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub party: Vec<CritterRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CritterRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "emoji")]
    pub glyph: String,
    pub max_hp: u16,
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    #[serde(default = "default_level")]
    pub level: u8,
    pub moves: Vec<MoveRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,
    pub power: u16,
    #[serde(default = "default_acc")]
    pub acc: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critter_record_uses_save_field_names() {
        let record = CritterRecord {
            id: "emberpup".to_string(),
            name: "Emberpup".to_string(),
            glyph: "🐶🔥".to_string(),
            max_hp: 28,
            hp: 12,
            atk: 8,
            def: 4,
            level: 1,
            moves: vec![MoveRecord {
                name: "Ember".to_string(),
                power: 9,
                acc: 100,
            }],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["maxHp"], 28);
        assert_eq!(json["emoji"], "🐶🔥");
        assert_eq!(json["moves"][0]["acc"], 100);
    }

    #[test]
    fn test_missing_level_and_acc_take_defaults() {
        let raw = r#"{
            "id": "leaflet", "name": "Leaflet", "emoji": "🐸🍃",
            "maxHp": 32, "hp": 5, "atk": 7, "def": 5,
            "moves": [{"name": "Vine Whip", "power": 8}]
        }"#;
        let record: CritterRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.level, 1);
        assert_eq!(record.moves[0].acc, 100);
    }
}
