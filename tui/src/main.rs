//! MediDesk: interactive Ratatui console
//!
//! Tabbed list views over the reference hospital with a search bar, a
//! category filter, and the appointment form dialog.
//!
//! Usage:
//!   cargo run -p medidesk-tui
//!   cargo run -p medidesk-tui -- path/to/medidesk.toml

mod app;
mod dialog;
mod ui;

use std::{io, path::Path, time::Duration};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use medidesk_config::DeskConfig;
use medidesk_contracts::error::DeskResult;
use medidesk_core::{schedule::today, Hospital};

use crate::app::App;

// ── Startup ───────────────────────────────────────────────────────────────────

/// Build the hospital from the config file given as the first argument, or
/// from the built-in reference configuration.
fn load_hospital() -> DeskResult<Hospital> {
    let config = match std::env::args().nth(1) {
        Some(path) => DeskConfig::from_file(Path::new(&path))?,
        None => medidesk_ref_hospital::default_config()?,
    };
    medidesk_ref_hospital::build_hospital(&config)
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Fail before touching the terminal so the message stays readable.
    let hospital = match load_hospital() {
        Ok(hospital) => hospital,
        Err(e) => {
            eprintln!("medidesk-tui: {}", e);
            std::process::exit(1);
        }
    };

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(hospital, today());

    while !app.quit {
        terminal.draw(|f| ui::ui(f, &app))?;

        // Short poll so expired toasts disappear without a key press.
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        app.tick();
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
