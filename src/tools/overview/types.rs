use serde::{Deserialize, Serialize};

use crate::types::Information;

/// One creature entry (boosted header or list box).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewCreature {
    pub name: String,
    /// Race query parameter; the join key against the boosted creature.
    pub race: String,
    pub image_url: String,
    pub featured: bool,
}

/// The resolved boosted creature.
///
/// Row assembly takes this by reference, so the header has to be resolved
/// before any creature box is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostedCreature {
    pub name: String,
    pub race: String,
    pub image_url: String,
}

impl BoostedCreature {
    pub fn is_featured(&self, race: &str) -> bool {
        self.race == race
    }

    pub fn to_record(&self) -> OverviewCreature {
        OverviewCreature {
            name: self.name.clone(),
            race: self.race.clone(),
            image_url: self.image_url.clone(),
            featured: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreaturesContainer {
    pub boosted: OverviewCreature,
    #[serde(rename = "creature_list")]
    pub creatures: Vec<OverviewCreature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub creatures: CreaturesContainer,
    pub information: Information,
}
