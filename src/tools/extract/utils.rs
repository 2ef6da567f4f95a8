use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::types::RowLayout;

// Lazy static regex patterns, one per schema variant
static BOOSTED_ANCHOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a.*race=(?P<race>.*)".*?>(?P<name>.*)</a>"#).expect("valid regex")
});
static BOOSTED_IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img[^>]+\bsrc=["'](?P<src>[^"']+)["']"#).expect("valid regex")
});
static CREATURE_ROW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#".*race=(?P<race>.*)">"#,
        // src may sit anywhere among the image attributes
        r#"<img\b[^>]*?\bsrc="(?P<src>[^"]*)"[^>]*>"#,
        r#".*div>(?P<name>.*)</div>"#,
    ))
    .expect("valid regex")
});
static SIX_COLUMN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"<td>(?P<rank>.*)</td>"#,
        r#"<td.*">(?P<name>.*)</a></td>"#,
        r#"<td.*">(?P<vocation>.*)</td>"#,
        r#"<td>(?P<world>.*)</td>"#,
        r#"<td.*>(?P<level>.*)</td>"#,
        r#"<td.*>(?P<value>.*)</td>"#,
    ))
    .expect("valid regex")
});
static SEVEN_COLUMN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"<td>(?P<rank>.*)</td>"#,
        r#"<td.*">(?P<name>.*)</a></td>"#,
        r#"<td.*>(?P<title>.*)</td>"#,
        r#"<td.*>(?P<vocation>.*)</td>"#,
        r#"<td>(?P<world>.*)</td>"#,
        r#"<td.*>(?P<level>.*)</td>"#,
        r#"<td.*>(?P<value>.*)</td>"#,
    ))
    .expect("valid regex")
});
static HEADER_AGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#".*<div class="Text">Highscores.*Last Update: (?P<minutes>[0-9]+) minutes ago"#)
        .expect("valid regex")
});
static HEADER_PAGES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#".*<b>.*Pages: ?(?P<pages>.*)</b>.*<b>.*Results: ?(?P<results>[0-9,]+)</b>"#)
        .expect("valid regex")
});

/// Token marking one page link inside the "Pages" field.
pub(super) const PAGE_LINK_TOKEN: &str = r#"class="PageLink"#;

pub(super) fn boosted_anchor_captures(html: &str) -> Option<Captures<'_>> {
    BOOSTED_ANCHOR_REGEX.captures(html)
}

pub(super) fn boosted_image_captures(html: &str) -> Option<Captures<'_>> {
    BOOSTED_IMAGE_REGEX.captures(html)
}

pub(super) fn creature_row_captures(html: &str) -> Option<Captures<'_>> {
    CREATURE_ROW_REGEX.captures(html)
}

pub(super) fn row_pattern(layout: RowLayout) -> &'static Regex {
    match layout {
        RowLayout::SixColumn => &*SIX_COLUMN_REGEX,
        RowLayout::SevenColumn => &*SEVEN_COLUMN_REGEX,
    }
}

pub(super) fn header_age_captures(html: &str) -> Option<Captures<'_>> {
    HEADER_AGE_REGEX.captures(html)
}

pub(super) fn header_pages_captures(html: &str) -> Option<Captures<'_>> {
    HEADER_PAGES_REGEX.captures(html)
}

/// Owned text of a named group; empty when the group did not participate.
pub(super) fn group(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
