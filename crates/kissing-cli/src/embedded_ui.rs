#[cfg(test)]
#[path = "embedded_ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use kissing_term::configuration::Config;
use kissing_term::domain::services::AppStateProps;
use kissing_term::{destruct_terminal_for_panic, start_loop};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Leaves raw mode and the alternate screen when dropped, whichever setup
/// step or loop iteration failed first.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<TerminalGuard> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        destruct_terminal_for_panic();
    }
}

/// Takes over the terminal, runs the interactive loop and restores the
/// terminal afterwards, including on panic.
pub async fn run() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let _guard = TerminalGuard::new()?;

    let term_backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(term_backend)?;

    let app_state_props = AppStateProps {
        mode: Config::mode(),
        dimension: Config::dimension(),
    };

    let result = start_loop(&mut terminal, app_state_props).await;

    if let Err(err) = result.as_ref() {
        tracing::error!(error = ?err, "terminal loop failed");
    }

    result
}
