use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

// Any start tag, comment or doctype counts as markup
static MARKUP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z!]").expect("valid regex"));

/// True when the text contains at least one tag the parser can build a node from.
pub(super) fn looks_like_markup(html: &str) -> bool {
    !html.trim().is_empty() && MARKUP_REGEX.is_match(html)
}

pub(super) fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

pub(super) fn first_inner_html(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector).next().map(|el| el.inner_html())
}

pub(super) fn all_inner_html(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector).map(|el| el.inner_html()).collect()
}

/// Inner markup of every element sibling following the first match.
pub(super) fn following_siblings_inner_html(doc: &Html, selector: &Selector) -> Vec<String> {
    let Some(first) = doc.select(selector).next() else {
        return Vec::new();
    };
    first
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .map(|el| el.inner_html())
        .collect()
}
