pub mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::error::Result;
use crate::selectors::HIGHSCORE_ROW_SELECTOR;
use crate::tools::clean::title_case;
use crate::tools::extract::{match_highscore_header, match_highscore_row};
use crate::tools::parse::{load_fragment, select_rows_after_header};
use crate::types::Information;

/// Extract one page of a highscore table.
///
/// The page number is checked against the header before rows are read.
/// Rows that fit neither the category's layout (separators, column headers)
/// are skipped.
///
/// ## Errors
/// * [`ExtractError::MarkupParse`](crate::ExtractError::MarkupParse) when `html` has no markup
/// * [`ExtractError::PageOutOfRange`](crate::ExtractError::PageOutOfRange) when
///   `query.page` is 0 or beyond the advertised page count
pub fn extract_highscores(
    query: &HighscoresQuery,
    html: &str,
    information: Information,
) -> Result<HighscoresResponse> {
    let doc = load_fragment(html)?;

    let header = match_highscore_header(html);
    let highscore_page = resolve_page(&header, query.page)?;
    let highscore_age = resolve_age(&header);

    let layout = query.category.layout();
    let rows = select_rows_after_header(&doc, &HIGHSCORE_ROW_SELECTOR);
    let total_rows = rows.len();

    let highscore_list: Vec<HighscoreRecord> = rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let caps = match_highscore_row(row, layout);
            if caps.is_none() {
                tracing::debug!(row = idx, ?layout, "skipping row that does not fit layout");
            }
            caps
        })
        .inspect(|caps| {
            tracing::trace!(rank = %caps.rank, name = %caps.name, value = %caps.value, "matched highscore row")
        })
        .map(assemble_record)
        .collect();

    tracing::info!(
        category = %query.category,
        page = query.page,
        rows = total_rows,
        records = highscore_list.len(),
        "extracted highscores"
    );

    Ok(HighscoresResponse {
        highscores: Highscores {
            world: title_case(&query.world),
            category: query.category.as_str().to_string(),
            vocation: query.vocation.clone(),
            highscore_age,
            highscore_list,
            highscore_page,
        },
        information,
    })
}
