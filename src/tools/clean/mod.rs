mod tests;
mod utils;

use utils::*;

/// Sanitize a display name captured from markup.
///
/// Performs the following operations in order:
/// 1. Decode HTML entities (`&amp;` → `&`, `&#39;` → `'`, `&nbsp;` → NBSP)
/// 2. Normalize Unicode to NFC (canonical composition)
/// 3. Remove zero-width characters
/// 4. Remove control characters (except newlines/tabs)
/// 5. Normalize whitespace (non-breaking spaces included, then trim)
///
/// # Examples
/// ```
/// use tibia_extract::tools::clean::sanitize;
///
/// assert_eq!(sanitize("Dragon&nbsp;Lord"), "Dragon Lord");
/// assert_eq!(sanitize("Tom &amp; Jerry"), "Tom & Jerry");
/// ```
pub fn sanitize(raw: &str) -> String {
    let mut result = decode_html_entities(raw);
    result = normalize_unicode(&result);
    result = remove_zero_width_chars(&result);
    result = remove_control_chars(&result);
    normalize_whitespace(&result)
}

/// Tolerant integer coercion: strips thousands separators, 0 on failure.
///
/// # Examples
/// ```
/// use tibia_extract::tools::clean::to_int;
///
/// assert_eq!(to_int("1,234"), 1234);
/// assert_eq!(to_int("n/a"), 0);
/// ```
pub fn to_int(raw: &str) -> i64 {
    strip_thousands_separators(raw).parse().unwrap_or(0)
}

/// Like [`to_int`] but for fields that are never negative (rank, level).
pub fn to_count(raw: &str) -> u32 {
    u32::try_from(to_int(raw)).unwrap_or(0)
}

/// Title-case a world name (`"antica"` → `"Antica"`).
pub fn title_case(text: &str) -> String {
    capitalize_words(text.trim())
}
