// Shared building blocks
pub mod clean;
pub mod extract;
pub mod parse;

// Page extractors
pub mod highscores;
pub mod overview;
