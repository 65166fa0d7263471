use presskit_core::format_time;
use ratatui::{
    Frame,
    crossterm::event::KeyCode,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::state::{AppState, list_next, list_prev};

const SEEK_STEP: f32 = 5.0;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Down => list_next(&mut state.tracks_list, state.tracks.len()),
        KeyCode::Up => list_prev(&mut state.tracks_list, state.tracks.len()),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(index) = state.selected_track() {
                state.toggle_track(index);
            }
        }
        KeyCode::Right => {
            if let Some(player) = state.active_track() {
                let target = player.state().current_time + SEEK_STEP;
                player.seek(target);
            }
        }
        KeyCode::Left => {
            if let Some(player) = state.active_track() {
                let target = player.state().current_time - SEEK_STEP;
                player.seek(target);
            }
        }
        KeyCode::Char('s') => state.stop_tracks(),
        _ => {}
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .tracks
        .iter()
        .map(|card| {
            let active = state.track_selection.is_active(card.track.id);
            let icon = if active { "▶" } else { " " };

            let status = if card.track.audio_url.is_none() {
                Span::styled("no audio", Style::default().fg(Color::DarkGray))
            } else if let Some(kind) = card.player.error() {
                Span::styled(format!("⚠ {}", kind), Style::default().fg(Color::Red))
            } else if card.player.is_loading() {
                Span::styled("loading…", Style::default().fg(Color::Yellow))
            } else {
                let playback = card.player.state();
                Span::styled(
                    format!(
                        "{} / {}",
                        format_time(playback.current_time),
                        format_time(playback.duration)
                    ),
                    Style::default().fg(Color::Gray),
                )
            };

            let title_style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", icon), Style::default().fg(Color::Green)),
                    Span::styled(card.track.title, title_style),
                    Span::styled(
                        format!("  {} ({})", card.track.genre, card.track.year),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(card.track.description, Style::default().fg(Color::Gray)),
                    Span::raw("  "),
                    status,
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" 🎵 Discography (Enter to play, ←/→ seek, S to stop) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = state.tracks_list.clone();
    f.render_stateful_widget(list, area, &mut list_state);
}
