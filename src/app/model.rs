//! Application model types: `App` and `InputMode`.
//!
//! `App` is the UI thread's view of the player. It is rebuilt purely from
//! `PlayerEvent`s and from cursor/input keys; it never talks to the engine.

use std::path::PathBuf;
use std::time::Duration;

use crate::player::{PlaybackStatus, PlayerEvent, TrackRow};
use crate::progress::Progress;

/// What keystrokes currently edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive the player.
    Normal,
    /// Keys edit the folder path prompt.
    FolderPrompt,
}

/// The main application model.
pub struct App {
    pub rows: Vec<TrackRow>,
    /// Cursor position in `rows`.
    pub selected: usize,
    pub folder: Option<PathBuf>,

    pub status: PlaybackStatus,
    /// Playlist index of the track that last started.
    pub now_playing: Option<usize>,
    pub title: Option<String>,
    pub progress: Progress,
    pub volume: f32,

    /// Last error shown in the status box.
    pub message: Option<String>,
    pub follow_playback: bool,

    pub input_mode: InputMode,
    pub input: String,
}

impl App {
    /// Create an empty `App`; rows arrive with the first `PlaylistReplaced`.
    pub fn new(follow_playback: bool, volume: f32) -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            folder: None,

            status: PlaybackStatus::Stopped,
            now_playing: None,
            title: None,
            progress: Progress::default(),
            volume,

            message: None,
            follow_playback,

            input_mode: InputMode::Normal,
            input: String::new(),
        }
    }

    /// Fold one player notification into the view.
    pub fn apply(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::PlaylistReplaced { folder, rows } => {
                self.rows = rows;
                self.folder = Some(folder);
                self.selected = 0;
                self.now_playing = None;
                self.title = None;
                self.message = None;
            }
            PlayerEvent::TrackStarted {
                index,
                title,
                duration,
            } => {
                self.now_playing = Some(index);
                self.title = Some(title);
                self.progress = Progress {
                    elapsed: Duration::ZERO,
                    total: duration,
                };
                self.message = None;
                if self.follow_playback {
                    self.select_track(index);
                }
            }
            PlayerEvent::StatusChanged(status) => self.status = status,
            PlayerEvent::VolumeChanged(volume) => self.volume = volume,
            PlayerEvent::PlaybackFailed { index, message } => {
                let label = self
                    .rows
                    .iter()
                    .find(|r| r.index == index)
                    .map(|r| r.label.as_str())
                    .unwrap_or("track");
                self.message = Some(format!("Cannot play {label}: {message}"));
            }
            PlayerEvent::Progress(progress) => {
                // A tick sampled just before a pause may arrive after it.
                if self.status == PlaybackStatus::Playing {
                    self.progress = progress;
                }
            }
            PlayerEvent::TrackEnded { .. } => {}
        }
    }

    /// Return true if the playlist has any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.rows.is_empty()
    }

    /// The row under the cursor.
    pub fn selected_row(&self) -> Option<&TrackRow> {
        self.rows.get(self.selected)
    }

    /// Move the cursor to the row of playlist slot `index`.
    pub fn select_track(&mut self, index: usize) {
        if let Some(pos) = self.rows.iter().position(|r| r.index == index) {
            self.selected = pos;
        }
    }

    /// Move selection to the next row, wrapping to the first.
    pub fn next(&mut self) {
        if self.has_tracks() {
            self.selected = (self.selected + 1) % self.rows.len();
        }
    }

    /// Move selection to the previous row, wrapping to the last.
    pub fn prev(&mut self) {
        if self.has_tracks() {
            self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Open the folder prompt, prefilled with the current folder.
    pub fn begin_folder_prompt(&mut self) {
        self.input_mode = InputMode::FolderPrompt;
        self.input = self
            .folder
            .as_ref()
            .map(|f| f.display().to_string())
            .unwrap_or_default();
    }

    pub fn push_input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input_char(&mut self) {
        self.input.pop();
    }

    pub fn cancel_prompt(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    /// Close the prompt and hand back the trimmed path, if any was typed.
    pub fn take_folder_input(&mut self) -> Option<PathBuf> {
        self.input_mode = InputMode::Normal;
        let raw = std::mem::take(&mut self.input);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }
}
