use std::sync::LazyLock;

use regex::Regex;

static SPECIAL_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[%=><]").unwrap());

static SQL_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(OR|SELECT|INSERT|DELETE|UPDATE|CREATE|DROP|EXEC|UNION|FETCH|DECLARE|TRUNCATE)\b",
    )
    .unwrap()
});

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Scrub a search keyword before it goes upstream: strip comparison
/// characters and SQL keywords, collapse whitespace.
pub fn sanitize_keyword(s: &str) -> String {
    let s = SPECIAL_CHARS.replace_all(s.trim(), "");
    let s = SQL_WORDS.replace_all(&s, "");
    WHITESPACE.replace_all(&s, " ").trim().to_string()
}
