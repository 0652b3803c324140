//! Terminal setup and the main event loop

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::logger::Logger;
use crate::session::SessionProvider;
use crate::store::TaskStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};

/// Run the TUI until the user quits. The terminal is restored even when the loop fails.
pub async fn run_app(
    config: &Config,
    store: Arc<dyn TaskStore>,
    session: &dyn SessionProvider,
    logger: Logger,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(config, store, session, logger);
    let mut event_handler = EventHandler::default();
    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Aborts pending store operations and milestone timers
    drop(app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f, f.area()))?;

        let event = event_handler.next_event().await?;
        if matches!(event, EventType::Other) {
            continue;
        }
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
