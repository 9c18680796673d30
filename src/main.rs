mod app;
mod components;
mod models;
mod registry;
mod tui;

use anyhow::Result;
use app::App;
use crossterm::terminal::{self, LeaveAlternateScreen};
use std::io;
use tracing_subscriber::EnvFilter;
use tui::Tui;

/// Log file written next to the binary. A TUI owns the terminal, so log
/// output has to go to a file instead of stdout.
const LOG_FILE: &str = "medroster.log";

fn main() -> Result<()> {
    let _cleanup = CleanupGuard;
    let _log_guard = init_logging()?;

    let mut tui = Tui::new()?;
    tui.init()?;

    let mut app = App::new();
    let res = app.run(&mut tui);

    tui.exit()?;

    if let Err(e) = res {
        eprintln!("Application Error: {e}");
    }
    Ok(())
}

fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

struct CleanupGuard;

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        // Ignore errors during cleanup
        let _ = terminal::disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
    }
}
