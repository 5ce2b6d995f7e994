use std::path::PathBuf;
use std::time::Duration;

use crate::library::Playlist;
use crate::progress::Progress;

use super::session::PlaybackStatus;

/// One playlist entry as shown in the track list.
///
/// Each row carries its own playlist index, so activating a row plays exactly
/// that slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    pub index: usize,
    pub label: String,
}

impl TrackRow {
    pub fn rows_for(playlist: &Playlist) -> Vec<TrackRow> {
        playlist
            .tracks
            .iter()
            .enumerate()
            .map(|(index, track)| TrackRow {
                index,
                label: track.name.clone(),
            })
            .collect()
    }
}

/// Notifications for observers (the UI and MPRIS), delivered over a channel
/// and applied on the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// The playlist was replaced; rebuild the track list.
    PlaylistReplaced { folder: PathBuf, rows: Vec<TrackRow> },
    /// A track started playing.
    TrackStarted {
        index: usize,
        title: String,
        duration: Duration,
    },
    StatusChanged(PlaybackStatus),
    VolumeChanged(f32),
    /// Loading the track at `index` failed; playback state is unchanged.
    PlaybackFailed { index: usize, message: String },
    /// Periodic position update from the synchronizer.
    Progress(Progress),
    /// The engine ran out of audio for the active track.
    TrackEnded {
        generation: u64,
    },
}
