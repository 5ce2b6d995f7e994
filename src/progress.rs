//! Progress synchronization: sampling the engine clock on a timer and
//! publishing position snapshots to the UI thread.

mod snapshot;
mod synchronizer;

pub use snapshot::Progress;
pub use synchronizer::Synchronizer;
