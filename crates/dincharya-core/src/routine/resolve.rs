//! Current-activity resolver.
//!
//! Entry `i` of a routine covers `[time[i], time[i + 1])`; the last entry runs
//! to the end of the day. The routine is walked in the order given.

use chrono::NaiveTime;

use super::activity::RoutineActivity;
use super::time::{format_clock, parse_label, truncate_to_minute, TimeMode, LITERAL_END_OF_DAY};

/// Find the routine entry active at `now`, if any.
pub fn resolve_current(
    now: NaiveTime,
    routine: &[RoutineActivity],
    mode: TimeMode,
) -> Option<&RoutineActivity> {
    match mode {
        TimeMode::Literal => resolve_literal(now, routine),
        TimeMode::Normalized => resolve_normalized(now, routine),
    }
}

/// String comparison of `HH:MM` against the stored labels, with an exclusive
/// `23:59` sentinel closing the last window.
fn resolve_literal(now: NaiveTime, routine: &[RoutineActivity]) -> Option<&RoutineActivity> {
    let now = format_clock(now);
    let now = now.as_str();

    routine.iter().enumerate().find_map(|(i, entry)| {
        let next = routine
            .get(i + 1)
            .map(|n| n.time.as_ref())
            .unwrap_or(LITERAL_END_OF_DAY);
        (now >= entry.time.as_ref() && now < next).then_some(entry)
    })
}

/// Chronological comparison; the last window includes 23:59.
fn resolve_normalized(now: NaiveTime, routine: &[RoutineActivity]) -> Option<&RoutineActivity> {
    let now = truncate_to_minute(now);
    let timed: Vec<(NaiveTime, &RoutineActivity)> = routine
        .iter()
        .filter_map(|entry| parse_label(&entry.time).map(|t| (t, entry)))
        .collect();

    timed.iter().enumerate().find_map(|(i, &(start, entry))| {
        let in_window = match timed.get(i + 1) {
            Some(&(end, _)) => now >= start && now < end,
            None => now >= start,
        };
        in_window.then_some(entry)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BASE_ROUTINE;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn activity_at(h: u32, m: u32, mode: TimeMode) -> Option<String> {
        resolve_current(t(h, m), &BASE_ROUTINE, mode).map(|a| a.activity.to_string())
    }

    #[test]
    fn empty_routine_resolves_to_none() {
        for mode in [TimeMode::Literal, TimeMode::Normalized] {
            assert!(resolve_current(t(0, 0), &[], mode).is_none());
            assert!(resolve_current(t(12, 0), &[], mode).is_none());
            assert!(resolve_current(t(23, 59), &[], mode).is_none());
        }
    }

    // Literal comparison of "05:00" against "5:00 AM" never matches; these
    // pin the long-standing behaviour rather than the intended one.
    #[test]
    fn literal_mode_misses_early_morning() {
        assert_eq!(activity_at(5, 0, TimeMode::Literal).as_deref(), None);
        assert_eq!(activity_at(6, 30, TimeMode::Literal).as_deref(), None);
    }

    #[test]
    fn literal_mode_matches_by_string_accident() {
        // "10:30" sorts after "10:00 PM" and before the "23:59" sentinel.
        assert_eq!(activity_at(10, 30, TimeMode::Literal).as_deref(), Some("Peaceful Sleep"));
        // "12:30" sorts between "12:00 PM" and "1:00 PM".
        assert_eq!(
            activity_at(12, 30, TimeMode::Literal).as_deref(),
            Some("Madhyahna (Midday Prayer)")
        );
    }

    #[test]
    fn normalized_mode_follows_the_clock() {
        assert_eq!(
            activity_at(5, 0, TimeMode::Normalized).as_deref(),
            Some("Brahma Muhurta (Sacred Hour)")
        );
        assert_eq!(activity_at(10, 30, TimeMode::Normalized).as_deref(), Some("Karma Yoga (Duty)"));
        assert_eq!(
            activity_at(12, 30, TimeMode::Normalized).as_deref(),
            Some("Madhyahna (Midday Prayer)")
        );
        assert_eq!(activity_at(23, 59, TimeMode::Normalized).as_deref(), Some("Peaceful Sleep"));
    }

    #[test]
    fn before_first_entry_is_none() {
        assert_eq!(activity_at(3, 0, TimeMode::Normalized).as_deref(), None);
    }

    #[test]
    fn window_start_is_inclusive_and_end_exclusive() {
        assert_eq!(activity_at(5, 29, TimeMode::Normalized).as_deref(), Some("Brahma Muhurta (Sacred Hour)"));
        assert_eq!(
            activity_at(5, 30, TimeMode::Normalized).as_deref(),
            Some("Sandhya Vandana (Dawn Prayer)")
        );
    }

    #[test]
    fn seconds_do_not_affect_normalized_resolution() {
        let now = NaiveTime::from_hms_opt(21, 59, 59).unwrap();
        let entry = resolve_current(now, &BASE_ROUTINE, TimeMode::Normalized).unwrap();
        assert_eq!(entry.activity, "Self-Reflection");
    }
}
