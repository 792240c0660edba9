//! Text scanning primitives shared by the extractors.
//!
//! Matched spans are never mutated in place: every consumer gets back a fresh
//! remainder string with the consumed span removed, so each extractor stays a
//! pure function of its input.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Compile a static pattern once and cache it for the process lifetime.
pub(crate) fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern must compile"))
}

/// Parse a numeric token, accepting both `82.5` and the Swedish `82,5`.
///
/// A failed or non-finite parse is a non-match, never an error.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    let value: f64 = normalized.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Boundary-safe keyword search: the keyword must not be glued to letters or
/// digits on either side, so `löp` does not fire inside `löpning`.
pub(crate) fn find_word(text: &str, word: &str) -> Option<Range<usize>> {
    if word.is_empty() {
        return None;
    }
    let mut from = 0;
    while let Some(pos) = text[from..].find(word) {
        let begin = from + pos;
        let end = begin + word.len();
        let before_ok = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(begin..end);
        }
        from = begin
            + word
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
    }
    None
}

/// Scan a longest-first keyword table and return the first boundary-safe hit.
pub(crate) fn find_in_table<T: Copy>(
    text: &str,
    table: &[(&str, T)],
) -> Option<(Range<usize>, T)> {
    for (surface, value) in table {
        if let Some(span) = find_word(text, surface) {
            return Some((span, *value));
        }
    }
    None
}

/// Remove a consumed span and re-collapse whitespace.
pub(crate) fn remove_span(text: &str, span: Range<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..span.start]);
    out.push(' ');
    out.push_str(&text[span.end..]);
    collapse_whitespace(&out)
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries_reject_embedded_stems() {
        assert!(find_word("löpning i skogen", "löp").is_none());
        assert_eq!(find_word("en löp tur", "löp"), Some(3..7));
        assert!(find_word("underarm", "arm").is_none());
    }

    #[test]
    fn word_search_ignores_digit_adjacency() {
        // "30min" must not yield the keyword "min" glued to digits here; unit
        // suffixes are matched by regex, not by the keyword scanner.
        assert!(find_word("30min", "min").is_none());
    }

    #[test]
    fn spans_are_removed_functionally() {
        let text = "5km löpning 30min";
        let without = remove_span(text, 0..3);
        assert_eq!(without, "löpning 30min");
        // The original is untouched.
        assert_eq!(text, "5km löpning 30min");
    }

    #[test]
    fn numbers_accept_comma_decimals() {
        assert_eq!(parse_number("82,5"), Some(82.5));
        assert_eq!(parse_number("82.5"), Some(82.5));
        assert_eq!(parse_number("x"), None);
    }
}
