use presskit_core::{catalog, format_time};
use ratatui::{
    Frame,
    crossterm::event::KeyCode,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::state::AppState;

const SEEK_STEP: f32 = 5.0;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char(' ') => state.featured.toggle_play(),
        KeyCode::Right => {
            let target = state.featured.state().current_time + SEEK_STEP;
            state.featured.seek(target);
        }
        KeyCode::Left => {
            let target = state.featured.state().current_time - SEEK_STEP;
            state.featured.seek(target);
        }
        KeyCode::Char('r') => state.featured.reset(),
        _ => {}
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Track info
            Constraint::Length(3), // Progress bar
            Constraint::Length(2), // Error / loading line
            Constraint::Min(0),
        ])
        .split(area);

    draw_track_info(f, chunks[0]);
    draw_progress(f, chunks[1], state);
    draw_status_line(f, chunks[2], state);
}

fn draw_track_info(f: &mut Frame, area: Rect) {
    let single = &catalog::FEATURED_SINGLE;

    let block = Block::default()
        .title(" 🎵 Featured Single ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = vec![
        Line::from(vec![
            Span::styled(single.title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  ({})", single.year),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            catalog::ARTIST_NAME,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            single.description,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            single.spotify_url,
            Style::default().fg(Color::Green),
        )),
    ];
    f.render_widget(Paragraph::new(text), inner);
}

fn draw_progress(f: &mut Frame, area: Rect, state: &AppState) {
    let playback = state.featured.state();
    let pct = (state.featured.progress() * 100.0) as u16;
    let label = format!(
        "{} / {}",
        format_time(playback.current_time),
        format_time(playback.duration)
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .percent(pct)
        .label(label);
    f.render_widget(gauge, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, state: &AppState) {
    let line = if let Some(kind) = state.featured.error() {
        let hint = if kind.is_recoverable() {
            " (press Space to retry)"
        } else {
            ""
        };
        Line::from(Span::styled(
            format!("⚠ {}{}", kind, hint),
            Style::default().fg(Color::Red),
        ))
    } else if state.featured.is_loading() {
        Line::from(Span::styled(
            "Loading…",
            Style::default().fg(Color::Yellow),
        ))
    } else if state.featured.is_playing() {
        Line::from(Span::styled("▶ Playing", Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled("⏸ Paused", Style::default().fg(Color::Gray)))
    };

    f.render_widget(Paragraph::new(vec![line]), area);
}
