use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::{App, InputMode};
use crate::audio::Engine;
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{Controller, PlaybackStatus, PlayerEvent};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

/// Seconds a `H` / `L` seek request asks to move.
const SEEK_STEP_SECS: f64 = 5.0;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: applies player events, handles input and draws.
/// Returns `Ok(())` when shutdown is requested.
#[allow(clippy::too_many_arguments)]
pub fn run<E: Engine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut Controller<E>,
    events: &mpsc::Receiver<PlayerEvent>,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let mut changed = false;
        while let Ok(event) = events.try_recv() {
            match event {
                PlayerEvent::TrackEnded { generation } => {
                    controller.handle_track_end(generation, settings.playback.auto_advance)
                }
                PlayerEvent::Progress(_) => app.apply(event),
                other => {
                    app.apply(other);
                    changed = true;
                }
            }
        }
        if changed {
            update_mpris(mpris, app);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app, controller) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, controller, control_tx, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply a gesture coming from MPRIS (or forwarded from a key).
/// Returns true when the app should quit.
fn handle_control_cmd<E: Engine>(
    cmd: ControlCmd,
    app: &mut App,
    controller: &mut Controller<E>,
) -> bool {
    match cmd {
        ControlCmd::Quit => {
            info!("quit requested");
            return true;
        }
        ControlCmd::SetVolume(v) => {
            controller.set_volume(v as f32);
            return false;
        }
        ControlCmd::Play => {
            if controller.status() != PlaybackStatus::Playing {
                controller.toggle_play_pause();
            }
        }
        ControlCmd::Pause | ControlCmd::Stop => {
            if controller.status() == PlaybackStatus::Playing {
                controller.toggle_play_pause();
            }
        }
        ControlCmd::PlayPause => controller.toggle_play_pause(),
        ControlCmd::Next => controller.next(),
        ControlCmd::Prev => controller.previous(),
    }
    // Only playback gestures need a playlist.
    if !app.has_tracks() {
        app.set_message("No tracks loaded; press o to open a folder");
    }
    false
}

fn handle_prompt_key<E: Engine>(key: KeyEvent, app: &mut App, controller: &mut Controller<E>) {
    match key.code {
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Enter => {
            let Some(dir) = app.take_folder_input() else {
                return;
            };
            if let Err(e) = controller.load_folder(&dir) {
                warn!(error = %e, "folder not loaded");
                app.set_message(e.to_string());
            }
        }
        KeyCode::Char(c) if !c.is_control() => app.push_input_char(c),
        _ => {}
    }
}

/// Returns true when the app should quit.
fn handle_key_event<E: Engine>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut Controller<E>,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    if app.input_mode == InputMode::FolderPrompt {
        state.pending_gg = false;
        handle_prompt_key(key, app, controller);
        return false;
    }

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => {
            let _ = control_tx.send(ControlCmd::Quit);
        }
        KeyCode::Char('o') => app.begin_folder_prompt(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter => {
            if let Some(index) = app.selected_row().map(|row| row.index) {
                controller.play_track_at(index);
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            controller.set_volume(controller.volume() + settings.audio.volume_step);
        }
        KeyCode::Char('-') => {
            controller.set_volume(controller.volume() - settings.audio.volume_step);
        }
        KeyCode::Char('L') => {
            controller.seek(app.progress.position_seconds() + SEEK_STEP_SECS);
        }
        KeyCode::Char('H') => {
            controller.seek(app.progress.position_seconds() - SEEK_STEP_SECS);
        }
        _ => {}
    }

    false
}
