use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

mod app;
mod build;
mod completion;
mod config;
mod editor;
mod error;
mod file;
mod syntax;
mod widgets;

use app::App;

/// How long the event loop waits for input before running a tick.
///
/// Ticks drive the debounce deadline and drain the worker channels, so the
/// timeout has to stay well below the completion debounce delay.
const TICK_MS: u64 = 50;

#[derive(Parser)]
#[command(name = "beach", version, about = "Terminal C++ editor with AI ghost-text completion")]
struct Cli {
    /// C++ source file to edit (started untitled when omitted)
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only useful during development; stderr output would
    // corrupt the TUI for normal use.
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load();
    let mut app = App::new(config, cli.file)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Wait briefly for input so debounce expiry and worker responses
        // are picked up even while the keyboard is idle.
        if event::poll(Duration::from_millis(TICK_MS))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
