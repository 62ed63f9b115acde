//! Schedule merge engine.
//!
//! Overlays character adjustments on the base routine. The result is always
//! re-derived from scratch; nothing is patched in place.

use tracing::debug;

use super::activity::{RoutineActivity, RoutineOverride};
use super::time::{compare_labels, TimeMode};
use crate::content::{overrides_for, Character, BASE_ROUTINE};

/// Merge `overrides` into a copy of `base`, ordering slots by collated label text.
pub fn merge_routine(base: &[RoutineActivity], overrides: &[RoutineOverride]) -> Vec<RoutineActivity> {
    merge_routine_with(base, overrides, TimeMode::Literal)
}

/// Merge `overrides` into a copy of `base`.
///
/// Each override replaces the first slot whose label string-equals its
/// `time`; unmatched overrides that name an activity are appended, the rest
/// are dropped. The merged routine is then stably sorted under `mode`.
/// Empty `overrides` return `base` as-is, unsorted.
pub fn merge_routine_with(
    base: &[RoutineActivity],
    overrides: &[RoutineOverride],
    mode: TimeMode,
) -> Vec<RoutineActivity> {
    let mut merged = base.to_vec();
    if overrides.is_empty() {
        return merged;
    }

    for adjustment in overrides {
        match merged.iter().position(|a| a.time == adjustment.time) {
            Some(index) => merged[index].apply(adjustment),
            None => match adjustment.to_activity() {
                Some(entry) => merged.push(entry),
                None => debug!(time = %adjustment.time, "dropping override without activity"),
            },
        }
    }

    merged.sort_by(|a, b| compare_labels(&a.time, &b.time, mode));
    merged
}

/// The routine to show for `character`, or the base routine when none is matched.
pub fn routine_for(character: Option<&Character>, mode: TimeMode) -> Vec<RoutineActivity> {
    let overrides = character.map(|c| overrides_for(c.name)).unwrap_or_default();
    let routine = merge_routine_with(&BASE_ROUTINE, overrides, mode);
    debug!(
        character = character.map(|c| c.name).unwrap_or("none"),
        entries = routine.len(),
        ?mode,
        "routine merged"
    );
    routine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::character_by_name;

    fn slot<'a>(routine: &'a [RoutineActivity], time: &str) -> &'a RoutineActivity {
        routine.iter().find(|a| a.time == time).unwrap()
    }

    #[test]
    fn empty_overrides_is_identity() {
        assert_eq!(merge_routine(&BASE_ROUTINE, &[]), BASE_ROUTINE.to_vec());
    }

    #[test]
    fn arjuna_replaces_two_slots() {
        let arjuna = character_by_name("Arjuna").unwrap();
        let merged = routine_for(Some(arjuna), TimeMode::Literal);

        assert_eq!(merged.len(), 15);
        assert_eq!(slot(&merged, "6:00 AM").activity, "Archery Practice");
        assert_eq!(slot(&merged, "4:00 PM").activity, "Target Practice");
        assert_eq!(slot(&merged, "6:00 AM").icon, "🧘");

        let unchanged = BASE_ROUTINE
            .iter()
            .filter(|base| merged.contains(base))
            .count();
        assert_eq!(unchanged, 13);
    }

    #[test]
    fn literal_sort_collates_labels_as_text() {
        let karna = character_by_name("Karna").unwrap();
        let merged = routine_for(Some(karna), TimeMode::Literal);
        let times: Vec<&str> = merged.iter().map(|a| a.time.as_ref()).collect();
        assert_eq!(
            times,
            [
                "1:00 PM", "10:00 PM", "12:00 PM", "2:00 PM", "4:00 PM", "5:00 AM", "5:30 AM",
                "6:00 AM", "6:00 PM", "7:00 AM", "7:00 PM", "8:00 AM", "8:00 PM", "9:00 AM",
                "9:00 PM",
            ]
        );
    }

    #[test]
    fn normalized_sort_is_chronological() {
        let karna = character_by_name("Karna").unwrap();
        let merged = routine_for(Some(karna), TimeMode::Normalized);
        assert_eq!(merged.first().unwrap().time, "5:00 AM");
        assert_eq!(merged.last().unwrap().time, "10:00 PM");
    }

    #[test]
    fn unmatched_override_is_appended() {
        let extra = RoutineOverride::adjustment("3:00 PM", "Tea", "Chai with friends", "Bhima");
        let merged = merge_routine(&BASE_ROUTINE, &[extra]);
        assert_eq!(merged.len(), 16);
        assert!(slot(&merged, "3:00 PM").belongs_to("Bhima"));
    }

    #[test]
    fn unmatched_override_without_activity_is_dropped() {
        let bare = RoutineOverride {
            time: "3:00 PM".into(),
            activity: None,
            description: Some("orphan".into()),
            icon: None,
            character: None,
        };
        let merged = merge_routine(&BASE_ROUTINE, &[bare]);
        assert_eq!(merged.len(), 15);
    }

    #[test]
    fn first_matching_slot_wins_for_repeated_overrides() {
        let first = RoutineOverride::adjustment("6:00 AM", "Archery", "a", "Arjuna");
        let second = RoutineOverride::adjustment("6:00 AM", "Wrestling", "b", "Bhima");
        let merged = merge_routine(&BASE_ROUTINE, &[first, second]);
        assert_eq!(slot(&merged, "6:00 AM").activity, "Wrestling");
        assert_eq!(merged.len(), 15);
    }

    #[test]
    fn no_character_yields_base() {
        assert_eq!(routine_for(None, TimeMode::Literal), BASE_ROUTINE.to_vec());
        assert_eq!(routine_for(None, TimeMode::Normalized), BASE_ROUTINE.to_vec());
    }
}
