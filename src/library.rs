//! Folder scanning and playlist model.
//!
//! A playlist is the flat list of audio files found directly inside one
//! folder, in the order the filesystem lists them.

mod model;
mod scan;

pub use model::{Playlist, Track};
pub use scan::load_folder;
