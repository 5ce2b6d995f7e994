use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace};

use crate::audio::PlaybackClock;
use crate::player::PlayerEvent;

use super::snapshot::Progress;

/// Background poller that turns engine position into [`PlayerEvent`]s.
///
/// It only reads the engine clock and sends events; the UI thread applies
/// them.
pub struct Synchronizer {
    shutdown: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

/// Per-thread memory between ticks.
#[derive(Debug, Default)]
pub(super) struct SyncState {
    /// Generation of the last track whose end was published.
    ended: Option<u64>,
}

/// Take one reading from `clock` and decide what, if anything, to publish.
pub(super) fn sample<C: PlaybackClock>(clock: &C, state: &mut SyncState) -> Option<PlayerEvent> {
    if clock.is_finished() {
        let generation = clock.generation();
        if state.ended == Some(generation) {
            return None;
        }
        state.ended = Some(generation);
        return Some(PlayerEvent::TrackEnded { generation });
    }
    state.ended = None;

    if !clock.is_playing() {
        return None;
    }

    // Negative readings are the engine's "no track" sentinel: skip the tick.
    Progress::from_seconds(clock.elapsed_seconds(), clock.duration_seconds())
        .map(PlayerEvent::Progress)
}

impl Synchronizer {
    /// Start polling `clock` every `interval`, publishing on `events`.
    pub fn spawn<C: PlaybackClock>(
        clock: C,
        interval: Duration,
        events: Sender<PlayerEvent>,
    ) -> std::io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = shutdown.clone();

        let join = thread::Builder::new()
            .name("progress-sync".to_string())
            .spawn(move || {
                let mut state = SyncState::default();
                while !flag.load(Ordering::Acquire) {
                    if let Some(event) = sample(&clock, &mut state) {
                        trace!(?event, "publishing");
                        if events.send(event).is_err() {
                            debug!("event receiver gone, stopping synchronizer");
                            break;
                        }
                    }
                    thread::park_timeout(interval);
                }
            })?;

        Ok(Self {
            shutdown,
            join: Some(join),
        })
    }

    /// Ask the thread to stop and wait for it; returns within one interval.
    pub fn shutdown(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            join.thread().unpark();
            let _ = join.join();
        }
    }
}

impl Drop for Synchronizer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
