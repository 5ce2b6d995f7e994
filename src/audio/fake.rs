//! In-memory engine used by controller and synchronizer tests.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::error::PlaybackError;

use super::types::{Engine, NO_TRACK, PlaybackClock};

#[derive(Debug)]
pub struct FakeState {
    pub loaded: Option<PathBuf>,
    pub paused: bool,
    pub finished: bool,
    pub volume: f32,
    pub elapsed: f64,
    pub duration: Duration,
    pub loads: Vec<PathBuf>,
    pub released: bool,
    failing: HashSet<PathBuf>,
}

#[derive(Clone)]
pub struct FakeEngine {
    state: Arc<Mutex<FakeState>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                loaded: None,
                paused: true,
                finished: false,
                volume: 1.0,
                elapsed: 0.0,
                duration: Duration::from_secs(180),
                loads: Vec::new(),
                released: false,
                failing: HashSet::new(),
            })),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Make every later `load` of `path` fail as if the file were missing.
    pub fn fail_on(&self, path: &Path) {
        self.state().failing.insert(path.to_path_buf());
    }

    /// Undo [`FakeEngine::fail_on`].
    pub fn recover(&self, path: &Path) {
        self.state().failing.remove(path);
    }
}

impl Engine for FakeEngine {
    type Clock = FakeClock;

    fn clock(&self) -> FakeClock {
        FakeClock {
            state: self.state.clone(),
        }
    }

    fn load(&mut self, path: &Path) -> Result<Duration, PlaybackError> {
        let mut s = self.state();
        if s.failing.contains(path) {
            return Err(PlaybackError::Open {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            });
        }
        s.loaded = Some(path.to_path_buf());
        s.loads.push(path.to_path_buf());
        s.paused = true;
        s.finished = false;
        s.elapsed = 0.0;
        Ok(s.duration)
    }

    fn play(&mut self) {
        self.state().paused = false;
    }

    fn pause(&mut self) {
        self.state().paused = true;
    }

    fn resume(&mut self) {
        self.state().paused = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.state().volume = volume;
    }

    fn volume(&self) -> f32 {
        self.state.lock().unwrap().volume
    }

    fn release(&mut self) {
        let mut s = self.state();
        s.loaded = None;
        s.released = true;
    }
}

#[derive(Clone)]
pub struct FakeClock {
    state: Arc<Mutex<FakeState>>,
}

impl FakeClock {
    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }
}

impl PlaybackClock for FakeClock {
    fn elapsed_seconds(&self) -> f64 {
        let s = self.state();
        if s.loaded.is_some() { s.elapsed } else { NO_TRACK }
    }

    fn duration_seconds(&self) -> f64 {
        let s = self.state();
        if s.loaded.is_some() {
            s.duration.as_secs_f64()
        } else {
            NO_TRACK
        }
    }

    fn is_playing(&self) -> bool {
        let s = self.state();
        s.loaded.is_some() && !s.paused && !s.finished
    }

    fn is_finished(&self) -> bool {
        let s = self.state();
        s.loaded.is_some() && !s.paused && s.finished
    }

    fn generation(&self) -> u64 {
        let s = self.state();
        if s.loaded.is_some() {
            s.loads.len() as u64
        } else {
            0
        }
    }
}
