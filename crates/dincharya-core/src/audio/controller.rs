//! Background-audio autoplay controller.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -- start: play ok -------------------------------> Playing
//! Idle -- start: refused --> AutoplayPending -- gesture --> Playing
//! ```
//!
//! Mute is independent of playback: toggling it never starts or stops the
//! track. `stop` (also run on drop) pauses and returns to `Idle`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::backend::AudioBackend;
use super::gesture::{GestureBus, GestureKind, GestureListener};
use crate::events::Event;

/// Gestures that count as user activation for playback.
const ACTIVATION_GESTURES: [GestureKind; 2] = [GestureKind::PointerDown, GestureKind::KeyDown];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Idle,
    /// Autoplay was refused; waiting for the first user gesture.
    AutoplayPending,
    Playing,
}

/// What got the track playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackTrigger {
    Autoplay,
    Gesture,
}

pub struct AutoplayController<B: AudioBackend> {
    backend: B,
    bus: GestureBus,
    playback: PlaybackState,
    /// Held only while `AutoplayPending`.
    listener: Option<GestureListener>,
}

impl<B: AudioBackend> AutoplayController<B> {
    pub fn new(mut backend: B, bus: GestureBus, muted: bool) -> Self {
        backend.set_muted(muted);
        Self {
            backend,
            bus,
            playback: PlaybackState::Idle,
            listener: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_muted(&self) -> bool {
        self.backend.is_muted()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Accessible label of the mute button.
    pub fn mute_label(&self) -> &'static str {
        if self.is_muted() {
            "Unmute background music"
        } else {
            "Mute background music"
        }
    }

    pub fn mute_glyph(&self) -> &'static str {
        if self.is_muted() {
            "🔇"
        } else {
            "🔊"
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Try to autoplay. On refusal, arm a one-shot gesture listener.
    pub fn start(&mut self) -> Option<Event> {
        if self.playback != PlaybackState::Idle {
            return None;
        }

        match self.backend.play() {
            Ok(()) => {
                self.playback = PlaybackState::Playing;
                Some(Event::PlaybackStarted {
                    trigger: PlaybackTrigger::Autoplay,
                    gesture: None,
                    at: Utc::now(),
                })
            }
            Err(e) => {
                debug!(error = %e, "autoplay refused, waiting for a user gesture");
                self.playback = PlaybackState::AutoplayPending;
                self.listener = Some(self.bus.subscribe(&ACTIVATION_GESTURES));
                Some(Event::AutoplayBlocked { at: Utc::now() })
            }
        }
    }

    /// Consume a pending activation gesture, if one arrived.
    ///
    /// The first gesture retries playback and releases the listener, so later
    /// gestures are never seen.
    pub fn poll_gestures(&mut self) -> Option<Event> {
        let gesture = self.listener.as_ref()?.take()?;

        if self.backend.is_paused() {
            if let Err(e) = self.backend.play() {
                warn!(error = %e, "playback retry after gesture failed");
            }
        }
        self.playback = PlaybackState::Playing;
        self.listener = None;

        Some(Event::PlaybackStarted {
            trigger: PlaybackTrigger::Gesture,
            gesture: Some(gesture),
            at: Utc::now(),
        })
    }

    pub fn toggle_mute(&mut self) -> Option<Event> {
        let muted = !self.backend.is_muted();
        self.backend.set_muted(muted);
        Some(Event::MuteToggled {
            muted,
            at: Utc::now(),
        })
    }

    /// Pause the track and release any pending gesture listener.
    pub fn stop(&mut self) {
        self.backend.pause();
        self.playback = PlaybackState::Idle;
        self.listener = None;
    }
}

impl<B: AudioBackend> Drop for AutoplayController<B> {
    fn drop(&mut self) {
        self.stop();
    }
}
