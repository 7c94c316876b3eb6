use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::{faction::Faction, ship::Ship};

/// Fixture shipped with the binary.
const STAR_WARS_JSON: &str = include_str!("../data/starwars.json");

/// Failures while loading the Star Wars dataset.
#[derive(Error, Debug)]
pub enum StarWarsDataError {
    #[error("Star Wars dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Faction `{faction}` references unknown ship `{ship}`.")]
    UnknownShip { faction: String, ship: String },
    #[error("Faction `{0}` does not exist.")]
    UnknownFaction(String),
    #[error("Ship id `{0}` is used more than once.")]
    DuplicateShip(String),
    #[error("Faction id `{0}` is used more than once.")]
    DuplicateFaction(String),
}

/// Raw layout of the dataset file.
#[derive(Deserialize)]
struct StarWarsFixture {
    ships: Vec<Ship>,
    factions: Vec<Faction>,
    rebels: String,
    empire: String,
}

/// Immutable factions/ships graph shared by all requests.
#[derive(Debug)]
pub struct StarWarsData {
    ships: HashMap<String, Ship>,
    factions: HashMap<String, Faction>,
    rebels_id: String,
    empire_id: String,
}

impl StarWarsData {
    /// Loads the bundled dataset.
    pub fn load() -> Result<Self, StarWarsDataError> {
        Self::from_json(STAR_WARS_JSON)
    }

    /// Parses a dataset and checks that ids are unique and every reference resolves.
    ///
    /// * `json` - Dataset in the layout of `data/starwars.json`.
    pub fn from_json(json: &str) -> Result<Self, StarWarsDataError> {
        let fixture: StarWarsFixture = serde_json::from_str(json)?;
        let mut ships: HashMap<String, Ship> = HashMap::new();
        for ship in fixture.ships {
            let id = ship._id.clone();
            if ships.insert(id.clone(), ship).is_some() {
                return Err(StarWarsDataError::DuplicateShip(id));
            }
        }
        for faction in &fixture.factions {
            if let Some(ship) = faction
                .internal_ship_ids
                .iter()
                .find(|id| !ships.contains_key(*id))
            {
                return Err(StarWarsDataError::UnknownShip {
                    faction: faction._id.clone(),
                    ship: ship.clone(),
                });
            }
        }
        let mut factions: HashMap<String, Faction> = HashMap::new();
        for faction in fixture.factions {
            let id = faction._id.clone();
            if factions.insert(id.clone(), faction).is_some() {
                return Err(StarWarsDataError::DuplicateFaction(id));
            }
        }
        for id in [&fixture.rebels, &fixture.empire] {
            if !factions.contains_key(id) {
                return Err(StarWarsDataError::UnknownFaction(id.clone()));
            }
        }
        Ok(Self {
            ships,
            factions,
            rebels_id: fixture.rebels,
            empire_id: fixture.empire,
        })
    }

    /// Retrieves ship of specific id.
    pub fn ship(&self, id: &str) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Retrieves faction of specific id.
    pub fn faction(&self, id: &str) -> Option<&Faction> {
        self.factions.get(id)
    }

    /// The Alliance to Restore the Republic.
    pub fn rebels(&self) -> Option<&Faction> {
        self.faction(&self.rebels_id)
    }

    /// The Galactic Empire.
    pub fn empire(&self) -> Option<&Faction> {
        self.faction(&self.empire_id)
    }

    /// Ships of a faction in fleet order.
    pub fn ships_of(&self, faction: &Faction) -> Vec<&Ship> {
        faction
            .internal_ship_ids
            .iter()
            .filter_map(|id| self.ship(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_the_bundled_dataset() {
        let data = StarWarsData::load().unwrap();
        let rebels = data.rebels().unwrap();
        assert_eq!(rebels.name, "Alliance to Restore the Republic");
        let names: Vec<&str> = data
            .ships_of(rebels)
            .into_iter()
            .map(|ship| ship.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["X-Wing", "Y-Wing", "A-Wing", "Millenium Falcon", "Home One"]
        );
        let empire = data.empire().unwrap();
        assert_eq!(empire.name, "Galactic Empire");
        assert_eq!(data.ships_of(empire).len(), 3);
    }

    #[test]
    fn rejects_dangling_ship_references() {
        let json = r#"{
            "ships": [{ "id": "1", "name": "X-Wing" }],
            "factions": [{ "id": "1", "name": "Rebels", "ships": ["1", "2"] }],
            "rebels": "1",
            "empire": "1"
        }"#;
        match StarWarsData::from_json(json) {
            Err(StarWarsDataError::UnknownShip { faction, ship }) => {
                assert_eq!((faction.as_str(), ship.as_str()), ("1", "2"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicate_ship_ids() {
        let json = r#"{
            "ships": [{ "id": "1", "name": "X-Wing" }, { "id": "1", "name": "Impostor" }],
            "factions": [{ "id": "1", "name": "Rebels", "ships": ["1"] }],
            "rebels": "1",
            "empire": "1"
        }"#;
        assert!(matches!(
            StarWarsData::from_json(json),
            Err(StarWarsDataError::DuplicateShip(id)) if id == "1"
        ));
    }

    #[test]
    fn rejects_duplicate_faction_ids() {
        let json = r#"{
            "ships": [{ "id": "1", "name": "X-Wing" }],
            "factions": [
                { "id": "1", "name": "Rebels", "ships": ["1"] },
                { "id": "1", "name": "Empire", "ships": [] }
            ],
            "rebels": "1",
            "empire": "1"
        }"#;
        assert!(matches!(
            StarWarsData::from_json(json),
            Err(StarWarsDataError::DuplicateFaction(id)) if id == "1"
        ));
    }

    #[test]
    fn rejects_unknown_factions() {
        let json = r#"{ "ships": [], "factions": [], "rebels": "1", "empire": "2" }"#;
        assert!(matches!(
            StarWarsData::from_json(json),
            Err(StarWarsDataError::UnknownFaction(id)) if id == "1"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            StarWarsData::from_json("{"),
            Err(StarWarsDataError::Parse(_))
        ));
    }
}
