#![doc = include_str!("../README.md")]

pub mod cli;
pub mod engine;
pub mod error;
pub mod selectors;
pub mod tools;
pub mod types;

pub use engine::*;
pub use error::*;
pub use types::*;

pub use tools::highscores::{
    extract_highscores, HighscoreCategory, HighscoreRecord, HighscoresQuery, HighscoresResponse,
};
pub use tools::overview::{extract_overview, OverviewCreature, OverviewResponse};
