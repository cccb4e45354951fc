use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cappella::config::Settings;
use cappella::controller::AppController;
use cappella::logging;
use cappella::model::LibraryCatalog;
use cappella::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load(std::env::args_os().nth(1).map(PathBuf::from))?;

    let _log_guard = match logging::init_logging(&settings.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Cappella Starting ===");

    let catalog = LibraryCatalog::load(&settings.library_path)
        .with_context(|| format!("loading library {}", settings.library_path.display()))?;
    tracing::info!(
        albums = catalog.albums().len(),
        tracks = catalog.track_count(),
        "Library ready"
    );

    let mut app = AppController::new(Arc::new(catalog), settings.search.clone());
    app.search.set_on_change(Box::new(|change| {
        tracing::trace!(?change, "Search state changed");
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Cappella shutting down");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppController) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|f| {
            AppView::render(f, &app.search, &app.playback, &mut app.ui);
        })?;

        // Short poll keeps finished searches flowing to the screen
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
