use serde::{Deserialize, Serialize};

/// Field layout of a highscore table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowLayout {
    /// Rank, Name, Vocation, World, Level, Value.
    SixColumn,
    /// Rank, Name, Title, Vocation, World, Level, Value.
    SevenColumn,
}

impl RowLayout {
    pub fn columns(&self) -> usize {
        match self {
            RowLayout::SixColumn => 6,
            RowLayout::SevenColumn => 7,
        }
    }

    pub fn has_title(&self) -> bool {
        matches!(self, RowLayout::SevenColumn)
    }
}

/// Raw captures from the boosted creature anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostedAnchor {
    pub race: String,
    pub name: String,
}

/// Raw captures from one creature box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureCaptures {
    pub race: String,
    pub image_url: String,
    pub raw_name: String,
}

/// Raw captures from one highscore row, still as markup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreCaptures {
    pub rank: String,
    pub name: String,
    /// Only present for [`RowLayout::SevenColumn`].
    pub title: Option<String>,
    pub vocation: String,
    pub world: String,
    pub level: String,
    pub value: String,
}

/// Raw captures from the highscore page header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderCaptures {
    pub age_minutes: Option<String>,
    /// Number of page links in the "Pages" field (0 when absent).
    pub page_links: u32,
    pub results: Option<String>,
}
