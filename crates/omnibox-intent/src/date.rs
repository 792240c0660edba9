//! Strips a leading/trailing date reference and resolves it to a calendar day.
//!
//! Runs before every other extractor so a numeric fragment like "03-15" can
//! never be misread as a quantity further down the cascade.

use crate::text::{collapse_whitespace, compiled, find_word, remove_span};
use regex::Regex;
use std::sync::OnceLock;
use time::{Date, Duration, Month};

/// Result of the date pass: the resolved day plus the remaining text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DateExtraction {
    pub date: Option<Date>,
    pub remainder: String,
}

/// Relative day references, Swedish first, longest surface form first.
const RELATIVE_DAYS: &[(&str, i64)] = &[
    ("day before yesterday", 2),
    ("i förrgår", 2),
    ("yesterday", 1),
    ("förrgår", 2),
    ("i går", 1),
    ("i dag", 0),
    ("today", 0),
    ("igår", 1),
    ("idag", 0),
];

static ABSOLUTE_RE: OnceLock<Regex> = OnceLock::new();

/// Resolve and remove a date reference from lowercased input text.
pub(crate) fn extract_date(text: &str, today: Date) -> DateExtraction {
    for (surface, days_back) in RELATIVE_DAYS {
        if let Some(span) = find_word(text, surface) {
            let date = today
                .checked_sub(Duration::days(*days_back))
                .unwrap_or(today);
            return DateExtraction {
                date: Some(date),
                remainder: remove_span(text, span),
            };
        }
    }

    let re = compiled(&ABSOLUTE_RE, r"\b(?:(\d{4})-)?(\d{1,2})-(\d{1,2})\b");
    if let Some(caps) = re.captures(text) {
        let resolved = caps
            .get(2)
            .zip(caps.get(3))
            .and_then(|(month, day)| {
                let year = caps
                    .get(1)
                    .and_then(|y| y.as_str().parse::<i32>().ok())
                    .unwrap_or_else(|| today.year());
                let month = month.as_str().parse::<u8>().ok()?;
                let day = day.as_str().parse::<u8>().ok()?;
                let month = Month::try_from(month).ok()?;
                Date::from_calendar_date(year, month, day).ok()
            });
        if let Some(date) = resolved {
            let span = caps
                .get(0)
                .map(|m| m.range())
                .unwrap_or(0..0);
            return DateExtraction {
                date: Some(date),
                remainder: remove_span(text, span),
            };
        }
    }

    DateExtraction {
        date: None,
        remainder: collapse_whitespace(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).expect("valid test date")
    }

    #[test]
    fn relative_references_resolve_against_today() {
        let today = day(2024, Month::March, 16);
        let got = extract_date("igår 5km löpning 30min", today);
        assert_eq!(got.date, Some(day(2024, Month::March, 15)));
        assert_eq!(got.remainder, "5km löpning 30min");

        let got = extract_date("löpning idag", today);
        assert_eq!(got.date, Some(today));
        assert_eq!(got.remainder, "löpning");

        let got = extract_date("i förrgår vikt 82", today);
        assert_eq!(got.date, Some(day(2024, Month::March, 14)));
        assert_eq!(got.remainder, "vikt 82");
    }

    #[test]
    fn absolute_fragments_resolve_with_and_without_year() {
        let today = day(2024, Month::June, 1);
        let got = extract_date("03-15 200g kyckling", today);
        assert_eq!(got.date, Some(day(2024, Month::March, 15)));
        assert_eq!(got.remainder, "200g kyckling");

        let got = extract_date("2023-12-24 skinka", today);
        assert_eq!(got.date, Some(day(2023, Month::December, 24)));
        assert_eq!(got.remainder, "skinka");
    }

    #[test]
    fn calendar_invalid_fragments_are_not_dates() {
        let today = day(2024, Month::June, 1);
        let got = extract_date("13-45 nånting", today);
        assert_eq!(got.date, None);
        assert_eq!(got.remainder, "13-45 nånting");
    }

    #[test]
    fn no_reference_leaves_text_unchanged() {
        let today = day(2024, Month::June, 1);
        let got = extract_date("3 kaffe", today);
        assert_eq!(got.date, None);
        assert_eq!(got.remainder, "3 kaffe");
    }
}
