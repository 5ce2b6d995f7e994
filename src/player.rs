//! Playback controller: the session state machine on top of an [`Engine`].
//!
//! [`Engine`]: crate::audio::Engine

mod controller;
mod events;
mod session;

pub use controller::Controller;
pub use events::{PlayerEvent, TrackRow};
pub use session::{PlaybackSession, PlaybackStatus};
