use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::LibraryError;

use super::model::{Playlist, Track};

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_audio_file(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the audio files directly inside `dir`.
///
/// Subdirectories are not entered and the directory-listing order is kept
/// as-is.
pub fn load_folder(dir: &Path, settings: &LibrarySettings) -> Result<Playlist, LibraryError> {
    if !dir.is_dir() {
        return Err(LibraryError::NotAFolder(dir.to_path_buf()));
    }

    let exts = normalized_extensions(settings);
    let mut tracks: Vec<Track> = Vec::new();

    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true);
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(LibraryError::Read {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_audio_file(path, &exts) {
            tracks.push(Track::from_path(path));
        }
    }

    info!(folder = %dir.display(), tracks = tracks.len(), "loaded folder");
    Ok(Playlist::new(dir.to_path_buf(), tracks))
}
