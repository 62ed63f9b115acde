//! Mythology quiz session.
//!
//! ## State Transitions
//!
//! ```text
//! InProgress(i, score, none, hidden)
//!   -- select_option --> InProgress(i, score', some, shown)
//!   -- advance -------> InProgress(i + 1, score', none, hidden) | Completed(score')
//! any -- reset --> InProgress(0, 0, none, hidden)
//! ```
//!
//! A question can be answered once; later selections are ignored until the
//! session advances.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::content::{QuizQuestion, QUIZ_QUESTIONS};
use crate::error::ValidationError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    InProgress {
        index: usize,
        score: u32,
        /// Index into the current question's options.
        selection: Option<usize>,
        explanation_visible: bool,
    },
    Completed {
        score: u32,
    },
}

impl QuizState {
    pub const INITIAL: QuizState = QuizState::InProgress {
        index: 0,
        score: 0,
        selection: None,
        explanation_visible: false,
    };

    pub fn score(&self) -> u32 {
        match *self {
            QuizState::InProgress { score, .. } | QuizState::Completed { score } => score,
        }
    }
}

/// How an option button should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    /// Nothing selected yet, or an unselected wrong option.
    Unanswered,
    /// Selected and right.
    Correct,
    /// Selected and wrong.
    Wrong,
    /// The right answer, shown after a wrong selection.
    Revealed,
}

/// Result banding by percentage of correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Expert,
    WellDone,
    GoodEffort,
    GreatStart,
}

impl ScoreTier {
    /// `>= 80%` expert, `>= 60%` well done, `>= 40%` good effort, else great start.
    pub fn for_score(score: u32, total: usize) -> Self {
        if total == 0 {
            return ScoreTier::GreatStart;
        }
        let pct = f64::from(score) / total as f64 * 100.0;
        if pct >= 80.0 {
            ScoreTier::Expert
        } else if pct >= 60.0 {
            ScoreTier::WellDone
        } else if pct >= 40.0 {
            ScoreTier::GoodEffort
        } else {
            ScoreTier::GreatStart
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreTier::Expert => "🏆 Amazing! You're a Mahabharata expert!",
            ScoreTier::WellDone => "👏 Well done! You know your mythology!",
            ScoreTier::GoodEffort => "📚 Good effort! Keep learning about our epics!",
            ScoreTier::GreatStart => "🌟 Great start! There's so much more to discover!",
        }
    }
}

/// Button letter for option `index` (`A`..`D`).
pub fn letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Option index for a button letter, case-insensitive.
pub fn letter_index(input: &str) -> Result<usize, ValidationError> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c @ ('a'..='d' | 'A'..='D')), None) => Ok((c.to_ascii_uppercase() as u8 - b'A') as usize),
        _ => Err(ValidationError::InvalidOption(input.to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a [QuizQuestion],
    state: QuizState,
}

impl Default for QuizSession<'static> {
    fn default() -> Self {
        Self::new(&QUIZ_QUESTIONS)
    }
}

impl<'a> QuizSession<'a> {
    pub fn new(bank: &'a [QuizQuestion]) -> Self {
        Self {
            bank,
            state: QuizState::INITIAL,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    /// 0-based index of the question on screen; `None` once completed.
    pub fn index(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { index, .. } => Some(index),
            QuizState::Completed { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&'a QuizQuestion> {
        self.bank.get(self.index()?)
    }

    pub fn selected_option(&self) -> Option<&'a str> {
        match self.state {
            QuizState::InProgress {
                selection: Some(pos),
                ..
            } => self.current_question().map(|q| q.options[pos]),
            _ => None,
        }
    }

    pub fn explanation_visible(&self) -> bool {
        matches!(
            self.state,
            QuizState::InProgress {
                explanation_visible: true,
                ..
            }
        )
    }

    /// Explanation text, once the current question has been answered.
    pub fn explanation(&self) -> Option<&'a str> {
        if !self.explanation_visible() {
            return None;
        }
        self.current_question().map(|q| q.explanation)
    }

    /// Display state of each option of the current question.
    pub fn option_states(&self) -> Vec<OptionState> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        let selected = self.selected_option();
        question
            .options
            .iter()
            .map(|&option| match selected {
                None => OptionState::Unanswered,
                Some(s) if s == option && question.is_correct(option) => OptionState::Correct,
                Some(s) if s == option => OptionState::Wrong,
                Some(_) if question.is_correct(option) => OptionState::Revealed,
                Some(_) => OptionState::Unanswered,
            })
            .collect()
    }

    /// Progress bar value: position while in progress, score once completed.
    pub fn progress_pct(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        match self.state {
            QuizState::InProgress { index, .. } => (index + 1) as f64 / total as f64 * 100.0,
            QuizState::Completed { score } => f64::from(score) / total as f64 * 100.0,
        }
    }

    /// Label of the advance button.
    pub fn next_label(&self) -> &'static str {
        match self.index() {
            Some(index) if index + 1 >= self.total() => "View Results",
            _ => "Next Question",
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.score(), self.total())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Answer the current question with `option`.
    ///
    /// Ignored (returns `None`) once an answer is locked in, after completion,
    /// or when `option` is not one of the current options.
    pub fn select_option(&mut self, option: &str) -> Option<Event> {
        let bank = self.bank;
        let QuizState::InProgress {
            index,
            score,
            selection,
            explanation_visible,
        } = &mut self.state
        else {
            return None;
        };
        if selection.is_some() {
            return None;
        }

        let question = bank.get(*index)?;
        let Some(pos) = question.options.iter().position(|o| *o == option) else {
            warn!(option, question = *index, "ignoring answer that is not an option");
            return None;
        };

        *selection = Some(pos);
        *explanation_visible = true;
        let correct = question.is_correct(option);
        if correct {
            *score += 1;
        }

        Some(Event::AnswerSelected {
            question_index: *index,
            option: option.to_string(),
            correct,
            score: *score,
            at: Utc::now(),
        })
    }

    /// Answer with the option at `pos` (the A-D buttons).
    pub fn select_index(&mut self, pos: usize) -> Option<Event> {
        let option = self.current_question()?.options.get(pos).copied()?;
        self.select_option(option)
    }

    /// Move past an answered question. No-op until the explanation is shown.
    pub fn advance(&mut self) -> Option<Event> {
        let QuizState::InProgress {
            index,
            score,
            explanation_visible: true,
            ..
        } = self.state
        else {
            return None;
        };

        if index + 1 < self.total() {
            self.state = QuizState::InProgress {
                index: index + 1,
                score,
                selection: None,
                explanation_visible: false,
            };
            return Some(Event::QuestionAdvanced {
                question_index: index + 1,
                at: Utc::now(),
            });
        }

        self.state = QuizState::Completed { score };
        let tier = self.tier();
        info!(score, total = self.total(), ?tier, "quiz completed");
        Some(Event::QuizCompleted {
            score,
            total: self.total(),
            message: tier.message().to_string(),
            at: Utc::now(),
        })
    }

    /// Start over ("Try Again").
    pub fn reset(&mut self) -> Option<Event> {
        self.state = QuizState::INITIAL;
        Some(Event::QuizReset { at: Utc::now() })
    }
}
