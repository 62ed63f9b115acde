//! Time-of-day handling for routine labels.
//!
//! Routine entries carry display labels (`5:00 AM`). How those labels are
//! ordered and compared against the clock is selected by [`TimeMode`].

use std::cmp::Ordering;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound of the last routine window in literal mode.
pub const LITERAL_END_OF_DAY: &str = "23:59";

/// How routine time labels are ordered and compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Plain string comparison of labels against a zero-padded `HH:MM` clock,
    /// with merged routines ordered by [`collate_labels`].
    ///
    /// This is the long-standing behaviour. Labels in `H:MM AM/PM` form do not
    /// compare meaningfully against a 24-hour clock string, so resolution is
    /// mostly wrong (05:00 matches nothing, 10:30 matches "10:00 PM").
    #[default]
    Literal,
    /// Labels are parsed to times of day and compared chronologically.
    Normalized,
}

/// Zero-padded 24-hour `HH:MM`.
pub fn format_clock(now: NaiveTime) -> String {
    now.format("%H:%M").to_string()
}

/// Parse `H:MM AM/PM` or 24-hour `HH:MM`.
pub fn parse_label(label: &str) -> Option<NaiveTime> {
    let label = label.trim();
    NaiveTime::parse_from_str(label, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(label, "%H:%M"))
        .ok()
}

/// Parse a user-supplied 24-hour `HH:MM` clock time.
pub fn parse_clock(input: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidClockTime(input.to_string()))
}

/// Drop seconds and below; routines have minute resolution.
pub fn truncate_to_minute(now: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

/// Primary collation weight of a character: whitespace, then punctuation
/// and symbols, then digits, then letters, ignoring case.
fn collation_weight(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

/// Root-locale style text ordering of two labels.
///
/// `:` and space rank below digits, so `"1:00 PM"` precedes `"10:00 PM"`.
/// Case only breaks ties, lowercase first.
pub fn collate_labels(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(collation_weight)
        .cmp(b.chars().map(collation_weight))
        .then_with(|| b.cmp(a))
}

/// Ordering of two labels under `mode`.
///
/// In normalized mode unparseable labels sort after every parseable one and
/// fall back to string order among themselves.
pub fn compare_labels(a: &str, b: &str, mode: TimeMode) -> Ordering {
    match mode {
        TimeMode::Literal => collate_labels(a, b),
        TimeMode::Normalized => match (parse_label(a), parse_label(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(t(5, 7)), "05:07");
        assert_eq!(format_clock(t(22, 0)), "22:00");
    }

    #[test]
    fn parses_twelve_hour_labels() {
        assert_eq!(parse_label("5:00 AM"), Some(t(5, 0)));
        assert_eq!(parse_label("12:00 PM"), Some(t(12, 0)));
        assert_eq!(parse_label("10:00 PM"), Some(t(22, 0)));
        assert_eq!(parse_label("17:30"), Some(t(17, 30)));
        assert_eq!(parse_label("teatime"), None);
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        assert_eq!(parse_clock("07:45"), Ok(t(7, 45)));
        assert!(parse_clock("7pm").is_err());
        assert!(parse_clock("25:00").is_err());
    }

    #[test]
    fn literal_order_ranks_separators_before_digits() {
        assert_eq!(compare_labels("10:00 PM", "5:00 AM", TimeMode::Literal), Ordering::Less);
        assert_eq!(compare_labels("1:00 PM", "10:00 PM", TimeMode::Literal), Ordering::Less);
        assert_eq!(compare_labels("1:00 PM", "12:00 PM", TimeMode::Literal), Ordering::Less);
        assert_eq!(compare_labels("12:00 PM", "2:00 PM", TimeMode::Literal), Ordering::Less);
        assert_eq!(compare_labels("6:00 AM", "6:00 PM", TimeMode::Literal), Ordering::Less);
    }

    #[test]
    fn collation_ignores_case_until_a_tie() {
        assert_eq!(collate_labels("5:00 am", "5:00 PM"), Ordering::Less);
        assert_eq!(collate_labels("5:00 am", "5:00 AM"), Ordering::Less);
        assert_eq!(collate_labels("5:00 AM", "5:00 AM"), Ordering::Equal);
        assert_eq!(collate_labels("5 PM", "5:00 PM"), Ordering::Less);
    }

    #[test]
    fn normalized_order_is_chronological() {
        assert_eq!(
            compare_labels("10:00 PM", "5:00 AM", TimeMode::Normalized),
            Ordering::Greater
        );
        assert_eq!(compare_labels("noon", "1:00 PM", TimeMode::Normalized), Ordering::Greater);
    }

    #[test]
    fn truncation_drops_seconds() {
        let now = NaiveTime::from_hms_opt(9, 15, 42).unwrap();
        assert_eq!(truncate_to_minute(now), t(9, 15));
    }
}
