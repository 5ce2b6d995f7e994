use std::path::Path;
use std::sync::mpsc::Sender;

use tracing::{debug, info, warn};

use crate::audio::{Engine, PlaybackClock};
use crate::config::LibrarySettings;
use crate::error::LibraryError;
use crate::library::{self, Playlist};

use super::events::{PlayerEvent, TrackRow};
use super::session::{PlaybackSession, PlaybackStatus};

/// Owns the playlist and the session and drives the engine.
///
/// Lives on the UI thread; every session write happens through `&mut self`.
pub struct Controller<E: Engine> {
    engine: E,
    playlist: Playlist,
    session: PlaybackSession,
    library: LibrarySettings,
    events: Sender<PlayerEvent>,
}

/// Step `current` by `step` slots, wrapping around a playlist of `len`.
///
/// An unset index counts as `-1`, so stepping forward from nothing lands on 0.
/// `len` must be non-zero.
pub(super) fn wrap_index(current: Option<usize>, len: usize, step: i64) -> usize {
    let current = current.map(|i| i as i64).unwrap_or(-1);
    (current + step).rem_euclid(len as i64) as usize
}

impl<E: Engine> Controller<E> {
    pub fn new(engine: E, library: LibrarySettings, events: Sender<PlayerEvent>) -> Self {
        Self {
            engine,
            playlist: Playlist::default(),
            session: PlaybackSession::default(),
            library,
            events,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn status(&self) -> PlaybackStatus {
        self.session.status
    }

    /// A position handle for the synchronizer thread.
    pub fn clock(&self) -> E::Clock {
        self.engine.clock()
    }

    fn publish(&self, event: PlayerEvent) {
        // The receiver only disappears during shutdown.
        let _ = self.events.send(event);
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.session.status != status {
            self.session.status = status;
            self.publish(PlayerEvent::StatusChanged(status));
        }
    }

    /// Replace the playlist with the audio files directly inside `dir`.
    ///
    /// On error the previous playlist stays in place.
    pub fn load_folder(&mut self, dir: &Path) -> Result<&Playlist, LibraryError> {
        let playlist = library::load_folder(dir, &self.library)?;
        let rows = TrackRow::rows_for(&playlist);

        self.playlist = playlist;
        self.session.current_index = None;
        self.publish(PlayerEvent::PlaylistReplaced {
            folder: dir.to_path_buf(),
            rows,
        });
        Ok(&self.playlist)
    }

    /// Load and start the track at `index`.
    ///
    /// Out-of-range indices are ignored. A track that fails to load is logged
    /// and reported; the index still moves to it but status is unchanged.
    /// Returns whether the track started.
    pub fn play_track_at(&mut self, index: usize) -> bool {
        let Some(track) = self.playlist.get(index) else {
            debug!(index, len = self.playlist.len(), "play index out of range");
            return false;
        };
        let path = track.path.clone();
        let title = track.name.clone();

        self.session.current_index = Some(index);

        match self.engine.load(&path) {
            Ok(duration) => {
                self.engine.play();
                self.session.track_duration = duration;
                info!(index, title = %title, ?duration, "playing");
                self.publish(PlayerEvent::TrackStarted {
                    index,
                    title,
                    duration,
                });
                self.set_status(PlaybackStatus::Playing);
                true
            }
            Err(e) => {
                warn!(index, error = %e, "could not play track");
                self.publish(PlayerEvent::PlaybackFailed {
                    index,
                    message: e.to_string(),
                });
                false
            }
        }
    }

    /// Stopped starts the current (or first) track; Playing and Paused flip.
    pub fn toggle_play_pause(&mut self) {
        if self.playlist.is_empty() {
            return;
        }

        match self.session.status {
            PlaybackStatus::Stopped => {
                self.play_track_at(self.session.current_index.unwrap_or(0));
            }
            PlaybackStatus::Paused => {
                self.engine.resume();
                self.set_status(PlaybackStatus::Playing);
            }
            PlaybackStatus::Playing => {
                self.engine.pause();
                self.set_status(PlaybackStatus::Paused);
            }
        }
    }

    pub fn next(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        let index = wrap_index(self.session.current_index, self.playlist.len(), 1);
        self.play_track_at(index);
    }

    pub fn previous(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        let index = wrap_index(self.session.current_index, self.playlist.len(), -1);
        self.play_track_at(index);
    }

    /// Clamp `volume` to `[0, 1]` and hand it to the engine.
    ///
    /// NaN and infinities are ignored.
    pub fn set_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            warn!(volume, "ignoring non-finite volume");
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.engine.set_volume(volume);
        self.publish(PlayerEvent::VolumeChanged(volume));
    }

    pub fn volume(&self) -> f32 {
        self.engine.volume()
    }

    /// Seeking is not supported: the request is accepted and nothing changes.
    pub fn seek(&mut self, position_seconds: f64) {
        debug!(position_seconds, "seek requested; not supported, ignoring");
    }

    /// React to the engine draining the track loaded as `generation`.
    ///
    /// Reports about a track that has since been replaced are dropped. With
    /// `auto_advance`, unplayable tracks are skipped; after a full lap of
    /// failures the session stops.
    pub fn handle_track_end(&mut self, generation: u64, auto_advance: bool) {
        if generation != self.engine.clock().generation() {
            debug!(generation, "ignoring end of a replaced track");
            return;
        }
        debug!(
            index = ?self.session.current_index,
            duration = ?self.session.track_duration,
            "track ended"
        );
        if !auto_advance || self.session.status != PlaybackStatus::Playing {
            return;
        }

        let len = self.playlist.len();
        for _ in 0..len {
            let index = wrap_index(self.session.current_index, len, 1);
            if self.play_track_at(index) {
                return;
            }
        }
        warn!(len, "no playable track left, stopping");
        self.set_status(PlaybackStatus::Stopped);
    }

    /// Release the engine. The session is left as-is.
    pub fn shutdown(&mut self) {
        self.engine.release();
    }
}
