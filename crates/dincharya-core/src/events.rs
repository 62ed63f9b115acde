use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audio::{GestureKind, PlaybackTrigger};
use crate::session::Tab;

/// Every state change in the system produces an Event.
/// Front ends render from these; nothing in the core depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A birth date matched a character (replaces any earlier match).
    CharacterMatched {
        name: String,
        day_of_month: u32,
        at: DateTime<Utc>,
    },
    /// The planner re-derived its merged routine.
    RoutineRecomputed {
        character: Option<String>,
        entries: usize,
        at: DateTime<Utc>,
    },
    /// The active routine bucket changed (or became empty).
    ActivityChanged {
        time: Option<String>,
        activity: Option<String>,
        at: DateTime<Utc>,
    },
    TabChanged {
        tab: Tab,
        at: DateTime<Utc>,
    },
    AnswerSelected {
        question_index: usize,
        option: String,
        correct: bool,
        score: u32,
        at: DateTime<Utc>,
    },
    QuestionAdvanced {
        question_index: usize,
        at: DateTime<Utc>,
    },
    QuizCompleted {
        score: u32,
        total: usize,
        message: String,
        at: DateTime<Utc>,
    },
    QuizReset {
        at: DateTime<Utc>,
    },
    /// Autoplay was refused; waiting for the first user gesture.
    AutoplayBlocked {
        at: DateTime<Utc>,
    },
    PlaybackStarted {
        trigger: PlaybackTrigger,
        gesture: Option<GestureKind>,
        at: DateTime<Utc>,
    },
    MuteToggled {
        muted: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Wire name of the variant, as used in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::CharacterMatched { .. } => "CharacterMatched",
            Event::RoutineRecomputed { .. } => "RoutineRecomputed",
            Event::ActivityChanged { .. } => "ActivityChanged",
            Event::TabChanged { .. } => "TabChanged",
            Event::AnswerSelected { .. } => "AnswerSelected",
            Event::QuestionAdvanced { .. } => "QuestionAdvanced",
            Event::QuizCompleted { .. } => "QuizCompleted",
            Event::QuizReset { .. } => "QuizReset",
            Event::AutoplayBlocked { .. } => "AutoplayBlocked",
            Event::PlaybackStarted { .. } => "PlaybackStarted",
            Event::MuteToggled { .. } => "MuteToggled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::MuteToggled {
            muted: true,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], event.kind());
        assert_eq!(json["muted"], true);
    }
}
