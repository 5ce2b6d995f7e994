use super::*;
use crate::player::{PlaybackStatus, PlayerEvent, TrackRow};
use crate::progress::Progress;
use std::path::PathBuf;
use std::time::Duration;

fn rows(labels: &[&str]) -> Vec<TrackRow> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| TrackRow {
            index,
            label: label.to_string(),
        })
        .collect()
}

fn loaded(labels: &[&str]) -> App {
    let mut app = App::new(true, 0.7);
    app.apply(PlayerEvent::PlaylistReplaced {
        folder: PathBuf::from("/music"),
        rows: rows(labels),
    });
    app
}

#[test]
fn playlist_replaced_resets_cursor_and_now_playing() {
    let mut app = loaded(&["a.mp3", "b.mp3"]);
    app.selected = 1;
    app.now_playing = Some(1);
    app.title = Some("b.mp3".into());
    app.set_message("old");

    app.apply(PlayerEvent::PlaylistReplaced {
        folder: PathBuf::from("/other"),
        rows: rows(&["x.ogg"]),
    });

    assert_eq!(app.selected, 0);
    assert_eq!(app.now_playing, None);
    assert_eq!(app.title, None);
    assert_eq!(app.message, None);
    assert_eq!(app.folder, Some(PathBuf::from("/other")));
    assert_eq!(app.selected_row().map(|r| r.label.as_str()), Some("x.ogg"));
}

#[test]
fn track_started_follows_playback_when_enabled() {
    let mut app = loaded(&["a.mp3", "b.mp3", "c.mp3"]);
    app.apply(PlayerEvent::TrackStarted {
        index: 2,
        title: "c.mp3".into(),
        duration: Duration::from_secs(125),
    });
    assert_eq!(app.selected, 2);
    assert_eq!(app.title.as_deref(), Some("c.mp3"));
    assert_eq!(app.progress.label(), "00:00 / 02:05");

    app.follow_playback = false;
    app.apply(PlayerEvent::TrackStarted {
        index: 0,
        title: "a.mp3".into(),
        duration: Duration::from_secs(10),
    });
    assert_eq!(app.selected, 2);
    assert_eq!(app.now_playing, Some(0));
}

#[test]
fn progress_only_applies_while_playing() {
    let mut app = loaded(&["a.mp3"]);
    let tick = Progress::from_seconds(65.7, 125.0).unwrap();

    app.apply(PlayerEvent::Progress(tick));
    assert_eq!(app.progress, Progress::default());

    app.apply(PlayerEvent::StatusChanged(PlaybackStatus::Playing));
    app.apply(PlayerEvent::Progress(tick));
    assert_eq!(app.progress.label(), "01:05 / 02:05");

    app.apply(PlayerEvent::StatusChanged(PlaybackStatus::Paused));
    app.apply(PlayerEvent::Progress(
        Progress::from_seconds(70.0, 125.0).unwrap(),
    ));
    assert_eq!(app.progress.label(), "01:05 / 02:05");
}

#[test]
fn playback_failure_names_the_track() {
    let mut app = loaded(&["a.mp3", "broken.wav"]);
    app.apply(PlayerEvent::PlaybackFailed {
        index: 1,
        message: "failed to decode".into(),
    });
    assert_eq!(
        app.message.as_deref(),
        Some("Cannot play broken.wav: failed to decode")
    );
}

#[test]
fn cursor_wraps_both_ways() {
    let mut app = loaded(&["a", "b", "c"]);
    app.prev();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.select_last();
    assert_eq!(app.selected, 2);
    app.select_first();
    assert_eq!(app.selected, 0);

    let mut empty = App::new(true, 0.7);
    empty.next();
    empty.prev();
    empty.select_last();
    assert_eq!(empty.selected, 0);
    assert!(empty.selected_row().is_none());
}

#[test]
fn folder_prompt_prefills_and_trims() {
    let mut app = loaded(&["a"]);
    app.begin_folder_prompt();
    assert_eq!(app.input_mode, InputMode::FolderPrompt);
    assert_eq!(app.input, "/music");

    app.pop_input_char();
    app.push_input_char('X');
    app.push_input_char(' ');
    assert_eq!(app.take_folder_input(), Some(PathBuf::from("/musiX")));
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.input.is_empty());

    app.begin_folder_prompt();
    app.input = "   ".into();
    assert_eq!(app.take_folder_input(), None);

    app.begin_folder_prompt();
    app.cancel_prompt();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.input.is_empty());
}
