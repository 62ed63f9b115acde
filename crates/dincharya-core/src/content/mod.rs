//! Static content tables.
//!
//! Everything here is process-wide constant data: the six characters, the
//! quiz bank, the base daily routine and per-character routine overrides.
//! Nothing here can be mutated.

mod characters;
mod quiz_bank;
mod routine;

pub use characters::{character_by_name, Character, CHARACTERS};
pub use quiz_bank::{QuizQuestion, QUIZ_QUESTIONS};
pub use routine::{overrides_for, BASE_ROUTINE};

/// Background track played by the audio controller.
pub const BACKGROUND_TRACK: &str = "/audio/karthikeya_2_bgm.mp3";

/// Full-page backdrop image.
pub const BACKGROUND_IMAGE: &str = "assets/mahabharata-bg.png";
