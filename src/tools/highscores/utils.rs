use crate::error::{ExtractError, Result};
use crate::tools::clean::{sanitize, to_count, to_int};
use crate::tools::extract::{HeaderCaptures, HighscoreCaptures};

use super::types::{HighscorePage, HighscoreRecord};

/// Validate the requested page against the header's page links.
///
/// Runs before any row is looked at: a page past the end has no rows,
/// which must not be mistaken for an empty table.
pub(super) fn resolve_page(header: &HeaderCaptures, requested: u32) -> Result<HighscorePage> {
    let total_pages = header.page_links;
    if requested == 0 || requested > total_pages {
        tracing::warn!(requested, total_pages, "highscore page out of range");
        return Err(ExtractError::PageOutOfRange {
            requested,
            total: total_pages,
        });
    }
    Ok(HighscorePage {
        current_page: requested,
        total_pages,
        total_highscores: header.results.as_deref().map(to_count).unwrap_or(0),
    })
}

/// Minutes since the table was refreshed; 0 when the header omits it.
pub(super) fn resolve_age(header: &HeaderCaptures) -> u32 {
    header.age_minutes.as_deref().map(to_count).unwrap_or(0)
}

pub(super) fn assemble_record(caps: HighscoreCaptures) -> HighscoreRecord {
    let record = HighscoreRecord {
        rank: to_count(&caps.rank),
        name: sanitize(&caps.name),
        vocation: caps.vocation,
        world: caps.world,
        level: to_count(&caps.level),
        value: to_int(&caps.value),
        title: caps.title.unwrap_or_default(),
    };
    if record.rank == 0 || record.level == 0 {
        tracing::debug!(name = %record.name, raw_rank = %caps.rank, raw_level = %caps.level, "numeric field defaulted to zero");
    }
    record
}
