mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use controller::AppController;
use model::AppModel;
use view::AppView;

fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== tunedeck starting ===");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Every launch starts from the default selection state
    let controller = AppController::new(AppModel::new());

    let res = run_app(&mut terminal, controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("tunedeck shutting down");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: AppController,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            AppView::render(frame, controller.model());
        })?;

        // Short poll so resize and key events feel immediate
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key)?;
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
