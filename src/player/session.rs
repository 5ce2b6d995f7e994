//! Session model types: `PlaybackSession` and `PlaybackStatus`.

use std::time::Duration;

/// The playback status of the session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What is currently loaded and whether it is playing.
///
/// Only the UI thread writes to it. Volume is not stored here; the engine
/// owns it.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    /// Playlist slot of the last attempted track; `None` until the first
    /// attempt and after every folder load.
    pub current_index: Option<usize>,
    pub status: PlaybackStatus,
    /// Length of the track that last started successfully.
    pub track_duration: Duration,
}
