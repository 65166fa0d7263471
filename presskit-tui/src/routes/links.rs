use presskit_core::catalog;
use ratatui::{
    Frame,
    crossterm::event::KeyCode,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, list_next, list_prev};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Down => list_next(&mut state.links_list, catalog::STREAMING_PLATFORMS.len()),
        KeyCode::Up => list_prev(&mut state.links_list, catalog::STREAMING_PLATFORMS.len()),
        _ => {}
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((catalog::STREAMING_PLATFORMS.len() * 2 + 2) as u16),
            Constraint::Length((catalog::SOCIAL_PLATFORMS.len() * 2 + 2) as u16),
            Constraint::Length((catalog::MEDIA_ASSETS.len() + 2) as u16),
            Constraint::Min(4),
        ])
        .split(area);

    draw_platforms(f, chunks[0], state);
    draw_socials(f, chunks[1]);
    draw_media_kit(f, chunks[2]);
    draw_contacts(f, chunks[3]);
}

fn draw_platforms(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = catalog::STREAMING_PLATFORMS
        .iter()
        .map(|platform| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(platform.name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!(
                            "  {} followers, {} monthly",
                            platform.followers, platform.monthly_listeners
                        ),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(platform.url, Style::default().fg(Color::Green)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" 🎧 Streaming ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = state.links_list.clone();
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_socials(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = catalog::SOCIAL_PLATFORMS
        .iter()
        .flat_map(|platform| {
            vec![
                Line::from(vec![
                    Span::styled(
                        platform.name,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}  {} followers", platform.handle, platform.followers),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("  {}", platform.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(platform.url, Style::default().fg(Color::Green)),
                ]),
            ]
        })
        .collect();

    let block = Block::default()
        .title(" 📱 Social ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_media_kit(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = catalog::MEDIA_ASSETS
        .iter()
        .map(|asset| {
            Line::from(vec![
                Span::styled(asset.name, Style::default().fg(Color::White)),
                Span::styled(
                    format!("  [{} {}]  ", asset.format, asset.size),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(asset.description, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" 📦 Media Kit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_contacts(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = catalog::CONTACTS
        .iter()
        .flat_map(|contact| {
            vec![
                Line::from(vec![
                    Span::styled(contact.name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {} at {}", contact.role, contact.company),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(contact.email, Style::default().fg(Color::Green)),
                    Span::raw("  "),
                    Span::styled(contact.phone, Style::default().fg(Color::DarkGray)),
                ]),
            ]
        })
        .collect();

    let block = Block::default()
        .title(" ✉ Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);
}
