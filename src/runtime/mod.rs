use std::env;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::RodioEngine;
use crate::mpris::ControlCmd;
use crate::player::{Controller, PlayerEvent};
use crate::progress::Synchronizer;

mod event_loop;
mod logging;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok());
    info!(dir = ?dir, "starting");

    let engine = RodioEngine::open_default()?;
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();
    let mut controller = Controller::new(engine, settings.library.clone(), event_tx.clone());
    let mut app = App::new(settings.ui.follow_playback, settings.audio.initial_volume);

    let startup_error = startup::apply_startup(&mut controller, &settings, dir.as_deref());
    // Fold the startup events in before the error so a failed load keeps its message.
    while let Ok(event) = event_rx.try_recv() {
        app.apply(event);
    }
    if let Some(msg) = startup_error {
        app.set_message(msg);
    }
    info!(
        folder = ?controller.playlist().folder,
        tracks = controller.playlist().len(),
        "ready"
    );

    let mut sync = Synchronizer::spawn(
        controller.clock(),
        Duration::from_millis(settings.progress.poll_interval_ms),
        event_tx,
    )?;

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());
    mpris_sync::update_mpris(&mpris, &app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::default();
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &event_rx,
        &mpris,
        &control_tx,
        &control_rx,
        &mut state,
    );

    sync.shutdown();
    controller.shutdown();
    info!(last_index = ?controller.session().current_index, "stopped");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
