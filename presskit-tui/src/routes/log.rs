use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

use crate::state::AppState;

pub fn draw(f: &mut Frame, area: Rect, _state: &AppState) {
    let log_widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" 📋 Log ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(log_widget, area);
}
