use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use crate::error::PlaybackError;

use super::sink::{create_sink, decoder_duration, open_source, probe_duration};
use super::types::{ActiveTrack, Engine, NO_TRACK, PlaybackClock, TrackSlot};

/// `rodio`-backed engine: one output stream, one sink per loaded track.
pub struct RodioEngine {
    stream: OutputStream,
    slot: TrackSlot,
    volume: f32,
    loads: u64,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Output(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            slot: Arc::new(Mutex::new(None)),
            volume: 1.0,
            loads: 0,
        })
    }

    fn with_sink(&self, f: impl FnOnce(&Sink)) {
        if let Ok(guard) = self.slot.lock() {
            if let Some(active) = guard.as_ref() {
                f(&active.sink);
            }
        }
    }
}

impl Engine for RodioEngine {
    type Clock = RodioClock;

    fn clock(&self) -> RodioClock {
        RodioClock {
            slot: self.slot.clone(),
        }
    }

    fn load(&mut self, path: &Path) -> Result<Duration, PlaybackError> {
        let source = open_source(path)?;
        let duration = probe_duration(path, decoder_duration(&source))?;
        let sink = create_sink(&self.stream, source, self.volume);

        self.loads += 1;
        let generation = self.loads;
        if let Ok(mut guard) = self.slot.lock() {
            if let Some(old) = guard.take() {
                old.sink.stop();
            }
            *guard = Some(ActiveTrack {
                sink,
                duration,
                generation,
            });
        }
        debug!(path = %path.display(), ?duration, generation, "track loaded");
        Ok(duration)
    }

    fn play(&mut self) {
        self.with_sink(|s| s.play());
    }

    fn pause(&mut self) {
        self.with_sink(|s| s.pause());
    }

    fn resume(&mut self) {
        self.with_sink(|s| s.play());
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.with_sink(|s| s.set_volume(volume));
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn release(&mut self) {
        if let Ok(mut guard) = self.slot.lock() {
            if let Some(active) = guard.take() {
                active.sink.stop();
            }
        }
        info!("audio engine released");
    }
}

/// Position handle for [`RodioEngine`]; reads the active sink under its lock.
#[derive(Clone)]
pub struct RodioClock {
    slot: TrackSlot,
}

impl RodioClock {
    fn read<T>(&self, f: impl FnOnce(&ActiveTrack) -> T) -> Option<T> {
        let guard = self.slot.lock().ok()?;
        guard.as_ref().map(f)
    }
}

impl PlaybackClock for RodioClock {
    fn elapsed_seconds(&self) -> f64 {
        self.read(|a| a.sink.get_pos().as_secs_f64())
            .unwrap_or(NO_TRACK)
    }

    fn duration_seconds(&self) -> f64 {
        self.read(|a| a.duration.as_secs_f64()).unwrap_or(NO_TRACK)
    }

    fn is_playing(&self) -> bool {
        self.read(|a| !a.sink.is_paused() && !a.sink.empty())
            .unwrap_or(false)
    }

    fn is_finished(&self) -> bool {
        self.read(|a| !a.sink.is_paused() && a.sink.empty())
            .unwrap_or(false)
    }

    fn generation(&self) -> u64 {
        self.read(|a| a.generation).unwrap_or(0)
    }
}
