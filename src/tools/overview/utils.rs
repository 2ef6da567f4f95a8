use crate::error::{ExtractError, Result};
use crate::tools::clean::sanitize;
use crate::tools::extract::{match_boosted_anchor, match_boosted_image, CreatureCaptures};

use super::types::{BoostedCreature, OverviewCreature};

/// Shortest decoded name a creature box may carry.
const MIN_NAME_CHARS: usize = 2;

pub(super) fn resolve_boosted(header_html: &str) -> Result<BoostedCreature> {
    let anchor = match_boosted_anchor(header_html).ok_or_else(|| {
        tracing::warn!("boosted creature anchor not found");
        ExtractError::BoostedCreatureMalformed { field: "race and name" }
    })?;
    let image_url = match_boosted_image(header_html).ok_or_else(|| {
        tracing::warn!("boosted creature image not found");
        ExtractError::BoostedCreatureMalformed { field: "image" }
    })?;

    Ok(BoostedCreature {
        name: sanitize(&anchor.name),
        race: anchor.race,
        image_url,
    })
}

/// Build a creature record, or `None` for decorative boxes with no real name.
pub(super) fn assemble_creature(
    caps: CreatureCaptures,
    boosted: &BoostedCreature,
) -> Option<OverviewCreature> {
    let name = sanitize(&caps.raw_name);
    if name.chars().count() < MIN_NAME_CHARS {
        tracing::debug!(race = %caps.race, raw_name = %caps.raw_name, "skipping creature with empty name");
        return None;
    }
    Some(OverviewCreature {
        featured: boosted.is_featured(&caps.race),
        name,
        race: caps.race,
        image_url: caps.image_url,
    })
}
