use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::tools::extract::RowLayout;
use crate::types::Information;

/// Highscore categories the community site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighscoreCategory {
    Achievements,
    AxeFighting,
    BossPoints,
    CharmPoints,
    ClubFighting,
    DistanceFighting,
    DromeScore,
    Experience,
    Fishing,
    FistFighting,
    GoshnarsTaint,
    LoyaltyPoints,
    MagicLevel,
    Shielding,
    SwordFighting,
}

/// Per-category row schema. Rows are in enum declaration order.
#[derive(Debug)]
pub struct CategorySchema {
    pub category: HighscoreCategory,
    pub name: &'static str,
    pub layout: RowLayout,
    pub value_label: &'static str,
    pub aliases: &'static [&'static str],
}

const fn schema(
    category: HighscoreCategory,
    name: &'static str,
    layout: RowLayout,
    value_label: &'static str,
    aliases: &'static [&'static str],
) -> CategorySchema {
    CategorySchema { category, name, layout, value_label, aliases }
}

pub static CATEGORY_TABLE: [CategorySchema; 15] = [
    schema(HighscoreCategory::Achievements, "achievements", RowLayout::SixColumn, "points", &["achievement"]),
    schema(HighscoreCategory::AxeFighting, "axefighting", RowLayout::SixColumn, "skill level", &["axe"]),
    schema(HighscoreCategory::BossPoints, "bosspoints", RowLayout::SixColumn, "points", &["boss", "bosses"]),
    schema(HighscoreCategory::CharmPoints, "charmpoints", RowLayout::SixColumn, "points", &["charm", "charms", "charmspoints"]),
    schema(HighscoreCategory::ClubFighting, "clubfighting", RowLayout::SixColumn, "skill level", &["club"]),
    schema(HighscoreCategory::DistanceFighting, "distancefighting", RowLayout::SixColumn, "skill level", &["distance"]),
    schema(HighscoreCategory::DromeScore, "dromescore", RowLayout::SixColumn, "score", &["drome"]),
    schema(HighscoreCategory::Experience, "experience", RowLayout::SixColumn, "points", &["exp"]),
    schema(HighscoreCategory::Fishing, "fishing", RowLayout::SixColumn, "skill level", &[]),
    schema(HighscoreCategory::FistFighting, "fistfighting", RowLayout::SixColumn, "skill level", &["fist"]),
    schema(HighscoreCategory::GoshnarsTaint, "goshnarstaint", RowLayout::SixColumn, "points", &["goshnar", "goshnars"]),
    schema(HighscoreCategory::LoyaltyPoints, "loyaltypoints", RowLayout::SevenColumn, "points", &["loyalty"]),
    schema(HighscoreCategory::MagicLevel, "magiclevel", RowLayout::SixColumn, "skill level", &["magic", "mlvl"]),
    schema(HighscoreCategory::Shielding, "shielding", RowLayout::SixColumn, "skill level", &["shield"]),
    schema(HighscoreCategory::SwordFighting, "swordfighting", RowLayout::SixColumn, "skill level", &["sword"]),
];

impl HighscoreCategory {
    pub fn all() -> impl Iterator<Item = HighscoreCategory> {
        CATEGORY_TABLE.iter().map(|row| row.category)
    }

    pub fn schema(&self) -> &'static CategorySchema {
        &CATEGORY_TABLE[*self as usize]
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        self.schema().name
    }

    /// Field layout of this category's table rows.
    pub fn layout(&self) -> RowLayout {
        self.schema().layout
    }

    /// What the value column holds: points, skill level or score.
    pub fn value_label(&self) -> &'static str {
        self.schema().value_label
    }
}

impl fmt::Display for HighscoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown highscore category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for HighscoreCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|row| row.name == key || row.aliases.contains(&key.as_str()))
            .map(|row| row.category)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Caller-supplied context for one highscores extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoresQuery {
    pub world: String,
    pub category: HighscoreCategory,
    /// Already-resolved vocation filter, passed through as-is.
    pub vocation: String,
    /// 1-based page number; 0 is rejected as out of range.
    pub page: u32,
}

impl HighscoresQuery {
    pub fn new(world: impl Into<String>, category: HighscoreCategory) -> Self {
        Self {
            world: world.into(),
            category,
            vocation: "all".into(),
            page: 1,
        }
    }
    pub fn with_vocation(mut self, vocation: impl Into<String>) -> Self {
        self.vocation = vocation.into();
        self
    }
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// One ranked player row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreRecord {
    pub rank: u32,
    pub name: String,
    pub vocation: String,
    pub world: String,
    pub level: u32,
    /// Points, skill level or score depending on the category.
    pub value: i64,
    /// Only filled for the loyalty points category.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscorePage {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(rename = "total_records")]
    pub total_highscores: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highscores {
    pub world: String,
    pub category: String,
    pub vocation: String,
    pub highscore_age: u32,
    pub highscore_list: Vec<HighscoreRecord>,
    pub highscore_page: HighscorePage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoresResponse {
    pub highscores: Highscores,
    pub information: Information,
}
