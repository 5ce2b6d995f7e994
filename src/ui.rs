//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, InputMode};
use crate::config::UiSettings;
use crate::player::PlaybackStatus;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("j/k", "up/down"),
        ("gg/G", "top/bottom"),
        ("enter", "play selected song"),
        ("space/p", "play/pause"),
        ("h/l", "prev/next song"),
        ("-/+", "volume"),
        ("o", "open folder"),
        ("q", "quit"),
    ])
});

fn controls_text() -> String {
    let order = ["j/k", "h/l", "enter", "space/p", "-/+", "gg/G", "o", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn status_text(app: &App) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = match app.status {
        PlaybackStatus::Playing => "Playing",
        PlaybackStatus::Paused => "Paused",
        PlaybackStatus::Stopped => "Stopped",
    };
    match &app.title {
        Some(title) => parts.push(format!("Song: {title} ({state})")),
        None => parts.push(state.to_string()),
    }

    parts.push(format!("Vol: {:.0}%", app.volume * 100.0));

    if app.follow_playback {
        parts.push("CURSOR: Follow".to_string());
    } else {
        parts.push("CURSOR: Free-roam".to_string());
    }

    if let Some(dir) = &app.folder {
        parts.push(format!("Dir: {}", dir.display()));
    }

    let mut text = parts.join(" • ");
    if let Some(msg) = &app.message {
        text.push('\n');
        text.push_str(msg);
    }
    text
}

/// Window of rows to render so the selection stays roughly centered.
/// Returns `(start, end, selected_pos_in_window)`.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    if total <= height || height == 0 {
        return (0, total, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadence ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let mut status_par = Paragraph::new(status_text(app))
        .block(
            Block::bordered()
                .padding(Padding::left(1))
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    if app.status == PlaybackStatus::Playing {
        status_par = status_par.slow_blink();
    }
    frame.render_widget(status_par, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio(app.progress.ratio())
        .label(app.progress.label());
    frame.render_widget(gauge, chunks[2]);

    {
        let total = app.rows.len();
        let (start, end, selected_pos) =
            visible_window(total, chunks[3].height.saturating_sub(2) as usize, app.selected);

        let items: Vec<ListItem> = app.rows[start..end]
            .iter()
            .map(|row| {
                if app.now_playing == Some(row.index) {
                    ListItem::new(format!("♪ {}", row.label)).bold()
                } else {
                    ListItem::new(format!("  {}", row.label))
                }
            })
            .collect();

        let title = if total == 0 {
            " tracks (none, press o) ".to_string()
        } else {
            format!(" tracks ({total}) ")
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(selected_pos));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    if app.input_mode == InputMode::FolderPrompt {
        let popup_area = centered_rect_sized(72, 3, chunks[3]);
        frame.render_widget(Clear, popup_area);
        let prompt = Paragraph::new(format!("{}_", app.input)).block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::left(1))
                .title(" open folder (enter loads, esc cancels) "),
        );
        frame.render_widget(prompt, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
