mod backend;
mod controller;
mod gesture;

pub use backend::{AudioBackend, NullAudio};
pub use controller::{AutoplayController, PlaybackState, PlaybackTrigger};
pub use gesture::{GestureBus, GestureKind, GestureListener};
