//! Utilities for turning a file path into a `rodio` source and sink.
//!
//! Opening, decoding and probing are kept separate from sink creation so a
//! broken file is rejected before anything about the current playback changes.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::PlaybackError;

pub(super) type FileSource = Decoder<BufReader<File>>;

/// Open and decode `path`.
pub(super) fn open_source(path: &Path) -> Result<FileSource, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the track length from its container, falling back to what the decoder
/// reported (`hint`) when the container has no usable length.
pub(super) fn probe_duration(
    path: &Path,
    hint: Option<Duration>,
) -> Result<Duration, PlaybackError> {
    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "tag probe failed");
            None
        }
    };
    pick_duration(tagged, hint).ok_or_else(|| PlaybackError::Probe {
        path: path.to_path_buf(),
    })
}

/// A zero container length means "not recorded", not an empty track.
pub(super) fn pick_duration(tagged: Option<Duration>, hint: Option<Duration>) -> Option<Duration> {
    tagged.filter(|d| !d.is_zero()).or(hint)
}

/// Create a paused `Sink` playing `source` at `volume`.
pub(super) fn create_sink(stream: &OutputStream, source: FileSource, volume: f32) -> Sink {
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.pause();
    sink.append(source);
    sink
}

/// Total duration hint from the decoder, if the format exposes one.
pub(super) fn decoder_duration(source: &FileSource) -> Option<Duration> {
    source.total_duration()
}
