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

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Down => list_next(&mut state.cards_list, state.cards.len()),
        KeyCode::Up => list_prev(&mut state.cards_list, state.cards.len()),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(index) = state.selected_card() {
                state.toggle_card(index);
            }
        }
        KeyCode::Char('s') => state.stop_cards(),
        _ => {}
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .cards
        .iter()
        .map(|card| {
            let active = state.selection.is_active(card.collab.id);
            let icon = if active { "▶" } else { " " };

            let status = if card.collab.audio_url.is_none() {
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
                    Span::styled(card.collab.title, title_style),
                    Span::styled(
                        format!("  ({})", card.collab.year),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        format!("{} — {}", card.collab.collaborator, card.collab.role),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw("  "),
                    status,
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" 🤝 Collaborations (Enter to play, S to stop) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = state.cards_list.clone();
    f.render_stateful_widget(list, area, &mut list_state);
}
