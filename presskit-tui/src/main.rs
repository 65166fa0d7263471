use std::io;
use std::time::Duration;

use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod router;
mod routes;
mod state;
mod ui;

use router::Section;
use state::AppState;

fn main() -> anyhow::Result<()> {
    tui_logger::init_logger(log::LevelFilter::Debug).expect("Failed to init tui_logger");
    tui_logger::set_default_level(log::LevelFilter::Debug);

    log::info!("Starting press kit TUI");

    run_tui()
}

fn run_tui() -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut state = AppState::new();

    loop {
        // Apply pending playback events before drawing
        state.pump();

        terminal.draw(|f| ui::draw(f, &state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && handle_key(key.code, &mut state)
            {
                break;
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Global keys first, then the active section's handler. Returns true to quit.
fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => {
            state.section = state.section.next();
            return false;
        }
        KeyCode::BackTab => {
            state.section = state.section.prev();
            return false;
        }
        _ => {}
    }

    match state.section {
        Section::Featured => routes::featured::handle_key(key, state),
        Section::Music => routes::tracks::handle_key(key, state),
        Section::Collaborations => routes::collaborations::handle_key(key, state),
        Section::Shows => routes::shows::handle_key(key, state),
        Section::Press => routes::press::handle_key(key, state),
        Section::Links => routes::links::handle_key(key, state),
        Section::Log => {}
    }
    false
}
