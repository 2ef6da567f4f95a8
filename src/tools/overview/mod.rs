pub mod types;
mod tests;
mod utils;

pub use types::*;
use utils::*;

use crate::error::Result;
use crate::selectors::{BOOSTED_HEADER_PATH, BOOSTED_HEADER_SELECTOR, CREATURE_ROW_SELECTOR};
use crate::tools::extract::match_creature_row;
use crate::tools::parse::{load_fragment, select_all_inner, select_first_inner};
use crate::types::Information;

/// Extract the boosted creature and the creature list from the library page.
///
/// A creature whose race equals the boosted race is marked `featured`, so
/// the boosted creature may appear featured in the list as well.
///
/// ## Errors
/// * [`ExtractError::MarkupParse`](crate::ExtractError::MarkupParse) when `html` has no markup
/// * [`ExtractError::StructureNotFound`](crate::ExtractError::StructureNotFound) without a header paragraph
/// * [`ExtractError::BoostedCreatureMalformed`](crate::ExtractError::BoostedCreatureMalformed)
///   when the header lacks the creature anchor or image
pub fn extract_overview(html: &str, information: Information) -> Result<OverviewResponse> {
    let doc = load_fragment(html)?;

    let header = select_first_inner(&doc, &BOOSTED_HEADER_SELECTOR, BOOSTED_HEADER_PATH)?;
    let boosted = resolve_boosted(&header)?;

    let boxes = select_all_inner(&doc, &CREATURE_ROW_SELECTOR);
    let total_boxes = boxes.len();
    let creatures: Vec<OverviewCreature> = boxes
        .iter()
        .filter_map(|row| match_creature_row(row))
        .inspect(|caps| {
            tracing::trace!(race = %caps.race, name = %caps.raw_name, "matched creature box")
        })
        .filter_map(|caps| assemble_creature(caps, &boosted))
        .collect();

    tracing::info!(
        boosted = %boosted.race,
        boxes = total_boxes,
        creatures = creatures.len(),
        "extracted creature overview"
    );

    Ok(OverviewResponse {
        creatures: CreaturesContainer {
            boosted: boosted.to_record(),
            creatures,
        },
        information,
    })
}
