//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// CSS path of the creature overview header (boosted creature paragraph).
pub const BOOSTED_HEADER_PATH: &str = ".InnerTableContainer p";

/// CSS path of the repeated creature boxes.
pub const CREATURE_ROW_PATH: &str = ".BoxContent div div";

/// CSS path of highscore table rows; the first match is the column header.
pub const HIGHSCORE_ROW_PATH: &str = ".TableContent tr";

/// Selector for the boosted creature header paragraph.
pub static BOOSTED_HEADER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(BOOSTED_HEADER_PATH).expect("valid boosted header selector"));

/// Selector for creature boxes nested in the content box.
pub static CREATURE_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(CREATURE_ROW_PATH).expect("valid creature row selector"));

/// Selector for highscore table rows.
pub static HIGHSCORE_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(HIGHSCORE_ROW_PATH).expect("valid highscore row selector"));
