use std::path::{Path, PathBuf};

/// One playable file in the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    /// File name as listed in the folder; doubles as the display title.
    pub name: String,
}

impl Track {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        Self {
            path: path.to_path_buf(),
            name,
        }
    }
}

/// Ordered tracks loaded from a single folder.
///
/// A playlist is only ever replaced as a whole; there is no incremental
/// add/remove.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    pub folder: Option<PathBuf>,
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(folder: PathBuf, tracks: Vec<Track>) -> Self {
        Self {
            folder: Some(folder),
            tracks,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }
}
