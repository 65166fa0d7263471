use presskit_core::format_time;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::{router::Section, routes, state::AppState};

/// Draw the TUI interface
pub fn draw(f: &mut Frame, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Length(18), // Sidebar navigation
            Constraint::Min(40),    // Section content
        ])
        .split(f.area());

    draw_sidebar(f, main_chunks[0], state);
    draw_main_content(f, main_chunks[1], state);
}

/// Sidebar navigation, generated from the Section enum
fn draw_sidebar(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Press Kit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let nav_text: Vec<Line> = Section::iter()
        .map(|section| {
            let is_active = state.section == section;
            let prefix = if is_active { "▶ " } else { "  " };
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{}{}", prefix, section), style))
        })
        .collect();

    f.render_widget(Paragraph::new(nav_text), inner);
}

fn draw_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Section content
            Constraint::Length(3), // Controls info
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    match state.section {
        Section::Featured => routes::featured::draw(f, chunks[0], state),
        Section::Music => routes::tracks::draw(f, chunks[0], state),
        Section::Collaborations => routes::collaborations::draw(f, chunks[0], state),
        Section::Shows => routes::shows::draw(f, chunks[0], state),
        Section::Press => routes::press::draw(f, chunks[0], state),
        Section::Links => routes::links::draw(f, chunks[0], state),
        Section::Log => routes::log::draw(f, chunks[0], state),
    }

    draw_controls(f, chunks[1], state);
    draw_status(f, chunks[2], state);
}

fn draw_controls(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next Section  "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit  "),
    ];
    match state.section {
        Section::Featured => spans.extend([
            Span::styled("[Space]", Style::default().fg(Color::Yellow)),
            Span::raw(" Play/Pause  "),
            Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
            Span::raw(" Seek  "),
            Span::styled("[R]", Style::default().fg(Color::Yellow)),
            Span::raw(" Reset"),
        ]),
        Section::Music => spans.extend([
            Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
            Span::raw(" Select  "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Play/Pause  "),
            Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
            Span::raw(" Seek  "),
            Span::styled("[S]", Style::default().fg(Color::Yellow)),
            Span::raw(" Stop"),
        ]),
        Section::Collaborations => spans.extend([
            Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
            Span::raw(" Select  "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Play/Pause  "),
            Span::styled("[S]", Style::default().fg(Color::Yellow)),
            Span::raw(" Stop"),
        ]),
        _ => spans.extend([
            Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
            Span::raw(" Scroll"),
        ]),
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Controls ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Global status bar: message on the left, featured playback on the right
fn draw_status(f: &mut Frame, area: Rect, state: &AppState) {
    let playback = state.featured.state();
    let playback_label = if state.featured.is_playing() {
        format!(
            "▶ {} / {}",
            format_time(playback.current_time),
            format_time(playback.duration)
        )
    } else if let Some(id) = state.track_selection.active_id() {
        state
            .tracks
            .iter()
            .find(|t| t.track.id == id)
            .map(|t| {
                let p = t.player.state();
                format!(
                    "▶ {} — {} / {}",
                    t.track.title,
                    format_time(p.current_time),
                    format_time(p.duration)
                )
            })
            .unwrap_or_default()
    } else if let Some(id) = state.selection.active_id() {
        state
            .cards
            .iter()
            .find(|c| c.collab.id == id)
            .map(|c| {
                let p = c.player.state();
                format!(
                    "▶ {} — {} / {}",
                    c.collab.title,
                    format_time(p.current_time),
                    format_time(p.duration)
                )
            })
            .unwrap_or_default()
    } else {
        String::new()
    };

    let line = Line::from(vec![
        Span::styled(&state.status_message, Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(playback_label, Style::default().fg(Color::Cyan)),
    ]);

    let paragraph =
        Paragraph::new(line).block(Block::default().title(" Status ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
