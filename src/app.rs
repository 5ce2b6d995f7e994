//! Application module: exposes the UI model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and mirrors the player state the
//! terminal shows: playlist rows, cursor, now playing and progress.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
