use presskit_core::catalog;
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
        KeyCode::Down => list_next(&mut state.press_list, catalog::PRESS_REVIEWS.len()),
        KeyCode::Up => list_prev(&mut state.press_list, catalog::PRESS_REVIEWS.len()),
        _ => {}
    }
}

fn stars(rating: f32) -> String {
    let full = rating.floor() as usize;
    let mut s = "★".repeat(full);
    if rating - full as f32 >= 0.5 {
        s.push('½');
    }
    s
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = catalog::PRESS_REVIEWS
        .iter()
        .map(|review| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        review.headline,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} ({:.1})", stars(review.rating), review.rating),
                        Style::default().fg(Color::Yellow),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        format!("{} — {}, {}", review.publication, review.reviewer, review.date),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(review.excerpt, Style::default().fg(Color::DarkGray)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" 📰 Press Reviews ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = state.press_list.clone();
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rendering_handles_halves() {
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(4.5), "★★★★½");
        assert_eq!(stars(4.2), "★★★★");
    }
}
