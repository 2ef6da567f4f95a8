#![cfg(test)]
mod tests {
    use crate::tools::clean::*;

    #[test]
    fn test_sanitize_named_entities() {
        assert_eq!(sanitize("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(sanitize("Dragon&nbsp;Lord"), "Dragon Lord");
        assert_eq!(sanitize("It&#39;s"), "It's");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize("  Old \n Ghoul  "), "Old Ghoul");
        assert_eq!(sanitize("&nbsp;"), "");
    }

    #[test]
    fn test_sanitize_unicode_forms_agree() {
        assert_eq!(sanitize("Jos\u{0065}\u{0301}"), sanitize("Jos\u{00E9}"));
    }

    #[test]
    fn test_sanitize_plain_text_passthrough() {
        assert_eq!(sanitize("Rotworm"), "Rotworm");
    }

    #[test]
    fn test_to_int_strips_thousands() {
        assert_eq!(to_int("1,234"), 1234);
        assert_eq!(to_int("12,345,678,901"), 12_345_678_901);
        assert_eq!(to_int(" 250 "), 250);
    }

    #[test]
    fn test_to_int_failure_is_zero() {
        assert_eq!(to_int(""), 0);
        assert_eq!(to_int("abc"), 0);
        assert_eq!(to_int("<b>12</b>"), 0);
    }

    #[test]
    fn test_to_count_rejects_negative() {
        assert_eq!(to_count("-5"), 0);
        assert_eq!(to_count("7"), 7);
        assert_eq!(to_count("99,999,999,999"), 0);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("antica"), "Antica");
        assert_eq!(title_case("ALL"), "All");
        assert_eq!(title_case(" secura "), "Secura");
    }
}
