mod utils;

use utils::*;

use crate::error::{ExtractError, Result};
use scraper::{Html, Selector};

/// Load a raw HTML fragment into a traversable document.
///
/// The HTML parser accepts any input, so "not markup" is decided up front:
/// blank input or text without a single tag fails with
/// [`ExtractError::MarkupParse`].
pub fn load_fragment(html: &str) -> Result<Html> {
    if !looks_like_markup(html) {
        tracing::warn!(len = html.len(), "input carries no markup");
        return Err(ExtractError::MarkupParse);
    }
    Ok(parse_document(html))
}

/// Inner markup of the first element matching a required singleton path.
///
/// `path` is only used to name the fragment in the error.
pub fn select_first_inner(doc: &Html, selector: &Selector, path: &str) -> Result<String> {
    first_inner_html(doc, selector).ok_or_else(|| {
        tracing::warn!(path, "required fragment missing");
        ExtractError::structure_not_found(path)
    })
}

/// Inner markup of every matching element, in document order.
///
/// Zero matches is a valid (empty) result.
pub fn select_all_inner(doc: &Html, selector: &Selector) -> Vec<String> {
    all_inner_html(doc, selector)
}

/// Inner markup of the element siblings after the first match.
///
/// Used for tables whose first row is a column header.
pub fn select_rows_after_header(doc: &Html, selector: &Selector) -> Vec<String> {
    following_siblings_inner_html(doc, selector)
}
