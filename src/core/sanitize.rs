// src/core/sanitize.rs
//
// Small string primitives shared by the listing parser and the extractor.
// "ASCII space" below means U+0020 only; `trim` is the Unicode-aware one.

/// True for the empty string too.
pub fn is_all_ascii(s: &str) -> bool {
    s.is_ascii()
}

pub fn has_ascii(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii())
}

/// Non-empty and made only of decimal digits, ASCII or fullwidth
/// ("1994", "２０１０"). Numeric letters such as "〇", "Ⅻ" or "½" do not count.
pub fn is_numeric_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_decimal_digit)
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{ff10}'..='\u{ff19}').contains(&c)
}

/// Text after the first `marker`, stopping at its next occurrence.
pub fn segment_after<'a>(s: &'a str, marker: &str) -> Option<&'a str> {
    let start = s.find(marker)? + marker.len();
    let rest = &s[start..];
    match rest.find(marker) {
        Some(end) => Some(&rest[..end]),
        None => Some(rest),
    }
}

/// Text before the first `pat`, or the whole string when absent.
pub fn before<'a>(s: &'a str, pat: &str) -> &'a str {
    s.find(pat).map_or(s, |i| &s[..i])
}

pub fn before_first_space(s: &str) -> &str {
    before(s, " ")
}

/// Title node text with surrounding whitespace (including `&nbsp;`) removed.
/// Inner spacing is kept as-is.
pub fn clean_title(s: &str) -> String {
    s!(s.trim())
}
