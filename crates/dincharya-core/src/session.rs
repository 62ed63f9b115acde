//! Top-level session state.
//!
//! Holds what the whole application shares: the matched character, the
//! active tab, the planner, the quiz (only while its tab is open) and the
//! audio controller. Child components never talk to each other directly;
//! a match flows one way, from the matcher into the planner.

use chrono::{Datelike, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::audio::{AudioBackend, AutoplayController, GestureBus};
use crate::content::Character;
use crate::events::Event;
use crate::matcher::{match_birth_date, parse_birth_date};
use crate::quiz::QuizSession;
use crate::routine::{DincharyaPlanner, TimeMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Character,
    Quiz,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Character => "🎭 Character Match",
            Tab::Quiz => "🧠 Mythology Quiz",
        }
    }
}

/// Settings a session is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub time_mode: TimeMode,
    pub tab: Tab,
    pub start_muted: bool,
}

pub struct AppSession<B: AudioBackend> {
    tab: Tab,
    matched: Option<&'static Character>,
    planner: DincharyaPlanner,
    quiz: Option<QuizSession<'static>>,
    audio: AutoplayController<B>,
}

impl<B: AudioBackend> AppSession<B> {
    pub fn new(options: SessionOptions, now: NaiveTime, backend: B, bus: GestureBus) -> Self {
        Self {
            tab: options.tab,
            matched: None,
            planner: DincharyaPlanner::new(options.time_mode, now),
            quiz: (options.tab == Tab::Quiz).then(QuizSession::default),
            audio: AutoplayController::new(backend, bus, options.start_muted),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn matched(&self) -> Option<&'static Character> {
        self.matched
    }

    pub fn planner(&self) -> &DincharyaPlanner {
        &self.planner
    }

    /// The open quiz, if the quiz tab is active.
    pub fn quiz(&self) -> Option<&QuizSession<'static>> {
        self.quiz.as_ref()
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizSession<'static>> {
        self.quiz.as_mut()
    }

    pub fn audio(&self) -> &AutoplayController<B> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AutoplayController<B> {
        &mut self.audio
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Handle date-picker input. Blank or malformed input leaves the current
    /// match untouched and produces no events.
    pub fn enter_birth_date(&mut self, input: &str) -> Vec<Event> {
        let Some(date) = parse_birth_date(input) else {
            return Vec::new();
        };
        let character = match_birth_date(date);
        self.matched = Some(character);
        info!(character = character.name, "character matched");

        let mut events = vec![Event::CharacterMatched {
            name: character.name.to_string(),
            day_of_month: date.day(),
            at: Utc::now(),
        }];
        events.extend(self.planner.set_character(Some(character)));
        events
    }

    /// Switch tabs. Leaving the quiz discards its progress; entering it
    /// starts a fresh session.
    pub fn select_tab(&mut self, tab: Tab) -> Option<Event> {
        if tab == self.tab {
            return None;
        }
        self.tab = tab;
        self.quiz = (tab == Tab::Quiz).then(QuizSession::default);
        Some(Event::TabChanged { tab, at: Utc::now() })
    }

    /// Forward a clock reading to the planner.
    pub fn tick(&mut self, now: NaiveTime) -> Option<Event> {
        self.planner.tick(now)
    }
}
