use presskit_core::catalog::{self, ShowStatus};
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
        KeyCode::Down => list_next(&mut state.shows_list, catalog::UPCOMING_SHOWS.len()),
        KeyCode::Up => list_prev(&mut state.shows_list, catalog::UPCOMING_SHOWS.len()),
        _ => {}
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = catalog::UPCOMING_SHOWS
        .iter()
        .map(|show| {
            let status_style = match show.status {
                ShowStatus::Confirmed => Style::default().fg(Color::Green),
                ShowStatus::Pending => Style::default().fg(Color::Yellow),
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(show.date, Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                    Span::styled(show.venue, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        format!("{}, {}", show.city, show.country),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw("  "),
                    Span::styled(show.kind, Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(show.status.to_string(), status_style),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" 📅 Upcoming Shows ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = state.shows_list.clone();
    f.render_stateful_widget(list, area, &mut list_state);
}
