//! Birth date to character matching.
//!
//! Only the day of the month matters: `index = day mod 6` into the fixed
//! character order.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::content::{Character, CHARACTERS};

/// Character for a birth date.
pub fn match_birth_date(date: NaiveDate) -> &'static Character {
    let index = date.day() as usize % CHARACTERS.len();
    &CHARACTERS[index]
}

/// Parse date-picker input (`YYYY-MM-DD`). Empty or malformed input is `None`.
pub fn parse_birth_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Parse and match in one step; `None` means "no match", not failure.
pub fn match_birth_input(input: &str) -> Option<&'static Character> {
    let date = parse_birth_date(input)?;
    let character = match_birth_date(date);
    debug!(%date, character = character.name, "birth date matched");
    Some(character)
}
