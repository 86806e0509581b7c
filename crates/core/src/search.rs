//! Case-insensitive substring matching helpers.
//!
//! User input is matched literally: `LIKE` metacharacters are escaped so a
//! search term can never be interpreted as a pattern.

/// Escape character used in generated `LIKE` patterns (PostgreSQL default).
pub const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and the escape character itself.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Build a `%term%` pattern that matches `term` anywhere in a column.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_like("sunset"), "sunset");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
    }

    #[test]
    fn backslash_is_escaped() {
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[test]
    fn contains_pattern_wraps_term() {
        assert_eq!(contains_pattern("abc"), "%abc%");
        assert_eq!(contains_pattern("%"), r"%\%%");
    }

    #[test]
    fn regex_metacharacters_pass_through() {
        assert_eq!(contains_pattern("(a+)+$"), "%(a+)+$%");
    }
}
