//! Dincharya planner state holder.
//!
//! Owns the merged routine for the matched character and the last clock
//! reading. The routine is rebuilt whenever the character changes; the active
//! bucket is re-resolved on every tick and on every rebuild.

use chrono::{NaiveTime, Utc};
use tracing::debug;

use super::activity::RoutineActivity;
use super::merge::routine_for;
use super::resolve::resolve_current;
use super::time::TimeMode;
use crate::content::Character;
use crate::events::Event;

#[derive(Debug, Clone)]
pub struct DincharyaPlanner {
    mode: TimeMode,
    character: Option<&'static Character>,
    routine: Vec<RoutineActivity>,
    now: NaiveTime,
    /// Bucket active at `now` as (time, activity), used to report changes only.
    active: Option<(String, String)>,
}

impl DincharyaPlanner {
    /// Planner showing the base routine at clock time `now`.
    pub fn new(mode: TimeMode, now: NaiveTime) -> Self {
        let mut planner = Self {
            mode,
            character: None,
            routine: routine_for(None, mode),
            now,
            active: None,
        };
        planner.active = planner
            .current()
            .map(|a| (a.time.to_string(), a.activity.to_string()));
        planner
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    pub fn character(&self) -> Option<&'static Character> {
        self.character
    }

    pub fn routine(&self) -> &[RoutineActivity] {
        &self.routine
    }

    pub fn now(&self) -> NaiveTime {
        self.now
    }

    /// Entry active at the last observed clock time.
    pub fn current(&self) -> Option<&RoutineActivity> {
        resolve_current(self.now, &self.routine, self.mode)
    }

    /// Whether `entry` comes from the matched character's adjustments.
    pub fn is_character_specific(&self, entry: &RoutineActivity) -> bool {
        self.character.is_some_and(|c| entry.belongs_to(c.name))
    }

    /// Wisdom line of the matched character.
    pub fn wisdom(&self) -> Option<&'static str> {
        self.character.map(|c| c.daily_wisdom)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Switch to `character`'s routine. Returns the events produced: always a
    /// recompute, plus an activity change when the active bucket moved.
    pub fn set_character(&mut self, character: Option<&'static Character>) -> Vec<Event> {
        self.character = character;
        self.routine = routine_for(character, self.mode);

        let mut events = vec![Event::RoutineRecomputed {
            character: character.map(|c| c.name.to_string()),
            entries: self.routine.len(),
            at: Utc::now(),
        }];
        events.extend(self.refresh());
        events
    }

    /// Record a new clock reading. Returns `Some` when the active bucket changed.
    pub fn tick(&mut self, now: NaiveTime) -> Option<Event> {
        self.now = now;
        self.refresh()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn refresh(&mut self) -> Option<Event> {
        let active = resolve_current(self.now, &self.routine, self.mode)
            .map(|a| (a.time.to_string(), a.activity.to_string()));
        if active == self.active {
            return None;
        }

        debug!(now = %self.now, active = ?active, "active routine bucket changed");
        self.active = active.clone();
        let (time, activity) = active.unzip();
        Some(Event::ActivityChanged {
            time,
            activity,
            at: Utc::now(),
        })
    }
}
