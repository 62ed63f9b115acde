//! # Dincharya Core Library
//!
//! Core logic for Mahabharata Dincharya: a character match keyed on birth
//! date, a mythology quiz, a daily-routine planner and background-audio
//! control. Everything runs on a single-threaded event loop; front ends
//! (the CLI here) feed input into the state holders and render the events
//! they return.
//!
//! ## Architecture
//!
//! - **Content**: immutable tables of characters, quiz questions, the base
//!   routine and per-character routine overrides
//! - **Routine**: schedule merge engine, current-activity resolver and the
//!   planner state holder
//! - **Quiz**: answer-once quiz state machine with score banding
//! - **Audio**: autoplay controller with a one-shot user-gesture fallback
//! - **Clock**: clock sources and a cancellable periodic ticker
//!
//! ## Key Components
//!
//! - [`DincharyaPlanner`]: merged routine + active bucket for a character
//! - [`QuizSession`]: quiz state machine
//! - [`AutoplayController`]: background track playback and mute
//! - [`AppSession`]: top-level session tying them together
//! - [`Config`]: application configuration management

pub mod audio;
pub mod clock;
pub mod content;
pub mod error;
pub mod events;
pub mod matcher;
pub mod quiz;
pub mod routine;
pub mod session;
pub mod storage;

pub use audio::{AudioBackend, AutoplayController, GestureBus, GestureKind, NullAudio, PlaybackState};
pub use clock::{spawn_ticker, Clock, FixedClock, SystemClock, TickerHandle};
pub use content::{character_by_name, Character, QuizQuestion, CHARACTERS, QUIZ_QUESTIONS};
pub use error::{ConfigError, CoreError, PlaybackError, ValidationError};
pub use events::Event;
pub use matcher::{match_birth_date, match_birth_input, parse_birth_date};
pub use quiz::{OptionState, QuizSession, QuizState, ScoreTier};
pub use routine::{
    merge_routine, resolve_current, routine_for, DincharyaPlanner, RoutineActivity,
    RoutineOverride, TimeMode,
};
pub use session::{AppSession, SessionOptions, Tab};
pub use storage::Config;
