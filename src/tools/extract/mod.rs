pub mod types;
mod utils;

pub use types::*;
use utils::*;

/// Match the boosted creature anchor (race query parameter + display name).
pub fn match_boosted_anchor(header_html: &str) -> Option<BoostedAnchor> {
    let caps = boosted_anchor_captures(header_html)?;
    Some(BoostedAnchor {
        race: group(&caps, "race"),
        name: group(&caps, "name"),
    })
}

/// Match the boosted creature image source.
pub fn match_boosted_image(header_html: &str) -> Option<String> {
    boosted_image_captures(header_html).map(|caps| group(&caps, "src"))
}

/// Match one creature box.
///
/// The display name is returned raw; decoding it is up to the caller.
pub fn match_creature_row(row_html: &str) -> Option<CreatureCaptures> {
    let caps = creature_row_captures(row_html)?;
    Some(CreatureCaptures {
        race: group(&caps, "race"),
        image_url: group(&caps, "src"),
        raw_name: group(&caps, "name"),
    })
}

/// Match one highscore row against the given layout.
pub fn match_highscore_row(row_html: &str, layout: RowLayout) -> Option<HighscoreCaptures> {
    let caps = row_pattern(layout).captures(row_html)?;
    Some(HighscoreCaptures {
        rank: group(&caps, "rank"),
        name: group(&caps, "name"),
        title: layout.has_title().then(|| group(&caps, "title")),
        vocation: group(&caps, "vocation"),
        world: group(&caps, "world"),
        level: group(&caps, "level"),
        value: group(&caps, "value"),
    })
}

/// Match the highscore header: data age, page link count and result total.
///
/// Each part is optional; a header with neither yields all defaults.
pub fn match_highscore_header(html: &str) -> HeaderCaptures {
    let mut out = HeaderCaptures::default();
    if let Some(caps) = header_age_captures(html) {
        out.age_minutes = Some(group(&caps, "minutes"));
    }
    if let Some(caps) = header_pages_captures(html) {
        out.page_links = count_page_links(&group(&caps, "pages"));
        out.results = Some(group(&caps, "results"));
    }
    out
}

/// Count page link tokens in the "Pages" field markup.
pub fn count_page_links(pages_html: &str) -> u32 {
    u32::try_from(pages_html.matches(PAGE_LINK_TOKEN).count()).unwrap_or(u32::MAX)
}
