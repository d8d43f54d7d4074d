//! `chatbar` - terminal chat composer
//!
//! Entry point for the application.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use chatbar::app::App;
use chatbar::cli::Args;
use chatbar::fs::ChatbarPaths;
use chatbar::logging;
use chatbar::tui::TerminalEventGuard;

fn main() -> Result<()> {
    let args = Args::parse();

    let paths = ChatbarPaths::from_cwd()?;
    // Held until after the terminal is restored so buffered events are flushed
    let _log_guard = logging::init(&paths, args.verbose)?;
    tracing::info!(base = %paths.base().display(), "starting chatbar");

    let app = App::new(paths, &args);

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, app);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Must come after ratatui::init, which resets terminal flags
    let _event_guard = TerminalEventGuard::new();

    loop {
        // Layout is calculated inside draw so it matches the rendered area
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Paste(text) => {
                    tracing::debug!(len = text.len(), lines = text.lines().count(), "paste");
                    app.handle_paste(&text);
                }
                Event::FocusLost => app.handle_focus_lost(),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("quit");
    Ok(())
}
