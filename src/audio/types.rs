//! The engine seam: what the controller and the synchronizer need from an
//! audio backend.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rodio::Sink;

use crate::error::PlaybackError;

/// Sentinel reported by [`PlaybackClock`] when no track is active.
pub const NO_TRACK: f64 = -1.0;

/// Decode/playback backend driven by the controller on the UI thread.
pub trait Engine {
    type Clock: PlaybackClock;

    /// A read-only handle that other threads may poll for position.
    fn clock(&self) -> Self::Clock;

    /// Open, decode and probe `path`, replacing the active track on success.
    ///
    /// The new track is left paused. On failure the previous track (if any)
    /// is untouched and keeps playing. Returns the track duration.
    fn load(&mut self, path: &Path) -> Result<Duration, PlaybackError>;

    fn play(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);

    /// Volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;

    /// Stop and drop the active track.
    fn release(&mut self);
}

/// Thread-safe view of the engine's playback position.
pub trait PlaybackClock: Clone + Send + Sync + 'static {
    /// Seconds into the active track, or [`NO_TRACK`] when nothing is loaded.
    fn elapsed_seconds(&self) -> f64;
    /// Length of the active track in seconds, or [`NO_TRACK`].
    fn duration_seconds(&self) -> f64;
    /// A track is loaded, not paused and still has audio queued.
    fn is_playing(&self) -> bool;
    /// A track is loaded, not paused and has run out of audio.
    fn is_finished(&self) -> bool;
    /// Load counter of the active track; changes with every successful load,
    /// `0` when nothing is loaded.
    fn generation(&self) -> u64;
}

/// The sink for the loaded track plus its probed length.
pub struct ActiveTrack {
    pub sink: Sink,
    pub duration: Duration,
    pub generation: u64,
}

pub type TrackSlot = Arc<Mutex<Option<ActiveTrack>>>;
