use std::fs::{self, File, OpenOptions};
use std::sync::Arc;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, LoggingSettings};

/// Install the global `tracing` subscriber.
///
/// The terminal is in raw mode while the UI runs, so output goes to a log
/// file. `RUST_LOG` overrides `logging.filter`.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.filter.as_str()));

    let writer = match open_log_file(settings) {
        Some(file) => BoxMakeWriter::new(Arc::new(file)),
        None => BoxMakeWriter::new(std::io::sink),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init();
}

fn open_log_file(settings: &LoggingSettings) -> Option<File> {
    let path = settings.file.clone().or_else(config::default_log_path)?;
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(&path).ok()
}
