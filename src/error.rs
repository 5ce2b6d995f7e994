//! Error types shared by the engine, the library scanner and the controller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a track into the audio engine.
///
/// These are recovered where they happen: logged, surfaced to the UI and the
/// session keeps its last good state.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// Neither the tag reader nor the decoder could tell how long the track is.
    #[error("could not determine the duration of {}", path.display())]
    Probe { path: PathBuf },

    #[error("no audio output device: {0}")]
    Output(String),
}

/// Failures while turning a folder into a playlist.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{} is not a folder", .0.display())]
    NotAFolder(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
