use std::path::Path;

use tracing::warn;

use crate::audio::Engine;
use crate::config;
use crate::player::Controller;

/// Apply configured defaults and load the initial folder, if one was given.
///
/// Returns a message for the status box when the folder could not be loaded.
pub fn apply_startup<E: Engine>(
    controller: &mut Controller<E>,
    settings: &config::Settings,
    dir: Option<&Path>,
) -> Option<String> {
    controller.set_volume(settings.audio.initial_volume);

    let dir = dir?;
    match controller.load_folder(dir) {
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "initial folder not loaded");
            Some(e.to_string())
        }
    }
}
