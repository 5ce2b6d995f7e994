//! Audio engine: the `Engine`/`PlaybackClock` seam and its `rodio` backend.

mod engine;
mod sink;
mod types;

pub use engine::RodioEngine;
pub use types::{Engine, PlaybackClock};

#[cfg(test)]
pub(crate) mod fake;
