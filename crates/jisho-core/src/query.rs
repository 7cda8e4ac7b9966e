//! Query forwarding rules.
//!
//! Jisho treats unquoted input as possible romaji and converts it to kana
//! before searching. Wrapping a term in double quotes makes it search the
//! literal English text instead. That switch belongs to the API, so queries
//! are forwarded exactly as typed, quotes and surrounding whitespace included.

/// Forward the query unchanged
pub fn normalize(input: &str) -> String {
    input.to_string()
}

/// Whether the query is worth sending at all.
///
/// Blank input is skipped, as is a lone quote mark, which is what the input
/// box holds right after the user starts typing a quoted literal.
pub fn is_searchable(input: &str) -> bool {
    let trimmed = input.trim();
    !(trimmed.is_empty() || trimmed == "\"" || trimmed == "'")
}

/// True for `"..."` input, which the API searches as literal English
pub fn is_quoted_literal(input: &str) -> bool {
    input.len() >= 2 && input.starts_with('"') && input.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn romaji_forwarded_unchanged() {
        assert_eq!(normalize("date"), "date");
    }

    #[test]
    fn quotes_forwarded_unchanged() {
        assert_eq!(normalize("\"date\""), "\"date\"");
    }

    #[test]
    fn whitespace_not_trimmed() {
        assert_eq!(normalize("  taberu "), "  taberu ");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["", "date", "\"date\"", "日付", " \"", "'x'", "a  b"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn blank_and_lone_quotes_not_searchable() {
        assert!(!is_searchable(""));
        assert!(!is_searchable("   "));
        assert!(!is_searchable("\""));
        assert!(!is_searchable(" ' "));
    }

    #[test]
    fn ordinary_queries_searchable() {
        assert!(is_searchable("date"));
        assert!(is_searchable("\"date"));
        assert!(is_searchable("\"\""));
        assert!(is_searchable("日付"));
    }

    #[test]
    fn quoted_literal_detection() {
        assert!(is_quoted_literal("\"date\""));
        assert!(is_quoted_literal("\"\""));
        assert!(!is_quoted_literal("\""));
        assert!(!is_quoted_literal("date"));
        assert!(!is_quoted_literal("\"date"));
    }
}
