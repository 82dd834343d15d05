//! Game-data registry: converted champions and items by id

use crate::config::StatMappings;
use crate::convert::{convert_champion, convert_item, RawChampion, RawItem};
use crate::error::DataError;
use crate::types::{Champion, Item};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The vendor file envelope: records keyed by id under a `data` field.
#[derive(Debug, Deserialize)]
struct RawDataFile<T> {
    data: BTreeMap<String, T>,
}

/// In-memory registry of converted game data. Records are converted once at
/// load; the engine only ever sees canonical stats.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    champions: BTreeMap<String, Champion>,
    items: BTreeMap<String, Item>,
}

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a vendor champion file from JSON text. Returns the number of
    /// champions loaded.
    pub fn load_champions_json(&mut self, json: &str) -> Result<usize, DataError> {
        let file: RawDataFile<RawChampion> = serde_json::from_str(json)?;
        let count = file.data.len();
        for (id, raw) in &file.data {
            self.champions.insert(id.clone(), convert_champion(raw));
        }
        tracing::info!(count, "loaded champions");
        Ok(count)
    }

    /// Load a vendor item file from JSON text, converting stat keys through
    /// the mapping table. Returns the number of items loaded.
    pub fn load_items_json(
        &mut self,
        json: &str,
        mappings: &StatMappings,
    ) -> Result<usize, DataError> {
        let file: RawDataFile<RawItem> = serde_json::from_str(json)?;
        let count = file.data.len();
        for (id, raw) in &file.data {
            self.items.insert(id.clone(), convert_item(id, raw, mappings));
        }
        tracing::info!(count, "loaded items");
        Ok(count)
    }

    pub fn load_champions_file(&mut self, path: &Path) -> Result<usize, DataError> {
        let json = fs::read_to_string(path)?;
        self.load_champions_json(&json)
    }

    pub fn load_items_file(
        &mut self,
        path: &Path,
        mappings: &StatMappings,
    ) -> Result<usize, DataError> {
        let json = fs::read_to_string(path)?;
        self.load_items_json(&json, mappings)
    }

    pub fn insert_champion(&mut self, champion: Champion) {
        self.champions.insert(champion.id.clone(), champion);
    }

    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn champion(&self, id: &str) -> Result<&Champion, DataError> {
        self.champions
            .get(id)
            .ok_or_else(|| DataError::ChampionNotFound(id.to_string()))
    }

    pub fn item(&self, id: &str) -> Result<&Item, DataError> {
        self.items
            .get(id)
            .ok_or_else(|| DataError::ItemNotFound(id.to_string()))
    }

    pub fn champions(&self) -> impl Iterator<Item = &Champion> {
        self.champions.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::{BonusKey, Stat};

    const CHAMPION_JSON: &str = r#"{
        "data": {
            "Ashe": {
                "id": "Ashe",
                "key": "22",
                "name": "Ashe",
                "title": "the Frost Archer",
                "partype": "Mana",
                "stats": {
                    "hp": 610.0,
                    "hpperlevel": 101.0,
                    "attackdamage": 59.0,
                    "attackdamageperlevel": 2.95,
                    "attackspeed": 0.658
                }
            }
        }
    }"#;

    const ITEM_JSON: &str = r#"{
        "data": {
            "1038": {
                "name": "B. F. Sword",
                "description": "<stats>+40 Attack Damage</stats>",
                "gold": { "base": 1300, "total": 1300, "sell": 910 },
                "stats": { "FlatPhysicalDamageMod": 40.0 }
            }
        }
    }"#;

    #[test]
    fn loads_and_looks_up() {
        let mut data = GameData::new();
        assert_eq!(data.load_champions_json(CHAMPION_JSON).unwrap(), 1);
        assert_eq!(
            data.load_items_json(ITEM_JSON, &StatMappings::default())
                .unwrap(),
            1
        );

        let ashe = data.champion("Ashe").unwrap();
        assert!((ashe.stats.get(Stat::AttackDamage) - 59.0).abs() < 1e-9);

        let sword = data.item("1038").unwrap();
        assert_eq!(sword.name, "B. F. Sword");
        assert!(
            (sword.stats[&BonusKey::Flat(Stat::AttackDamage)] - 40.0).abs() < 1e-9
        );
    }

    #[test]
    fn missing_ids_error_by_name() {
        let data = GameData::new();
        assert!(matches!(
            data.champion("Teemo"),
            Err(DataError::ChampionNotFound(id)) if id == "Teemo"
        ));
        assert!(matches!(
            data.item("9999"),
            Err(DataError::ItemNotFound(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut data = GameData::new();
        assert!(matches!(
            data.load_champions_json("{ not json"),
            Err(DataError::Parse(_))
        ));
    }
}
