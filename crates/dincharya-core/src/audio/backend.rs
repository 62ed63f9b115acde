use crate::error::PlaybackError;

/// A looping background track the controller can drive.
///
/// `play` reports the host's verdict synchronously; a refusal under an
/// autoplay policy is `PlaybackError::AutoplayBlocked`.
pub trait AudioBackend {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;
}

/// Backend that produces no sound and records what was asked of it.
///
/// Used by the CLI (which has no audio device) and by tests.
#[derive(Debug, Clone)]
pub struct NullAudio {
    track: String,
    paused: bool,
    muted: bool,
    /// Number of upcoming `play` calls to refuse as autoplay-blocked.
    refusals: u32,
    play_calls: u32,
}

impl NullAudio {
    pub fn new(track: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            paused: true,
            muted: false,
            refusals: 0,
            play_calls: 0,
        }
    }

    /// Refuse the first `play` call, like a browser before any user gesture.
    pub fn blocking_autoplay(mut self) -> Self {
        self.refusals = 1;
        self
    }

    pub fn track(&self) -> &str {
        &self.track
    }

    /// Every `play` call so far, refused or not.
    pub fn play_calls(&self) -> u32 {
        self.play_calls
    }
}

impl AudioBackend for NullAudio {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.play_calls += 1;
        if self.refusals > 0 {
            self.refusals -= 1;
            return Err(PlaybackError::AutoplayBlocked);
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
