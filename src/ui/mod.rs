//! Terminal presentation shell.
//!
//! The run loop owns the [`App`] and serializes every mutation: key
//! events and fetch completions are both funneled through one select,
//! so browse state is never touched from two call sites at once.

mod app;
mod events;
mod footer;
mod header;
mod input;
mod layout;
mod render;
mod terminal_guard;
mod theme;

pub use app::{App, InputMode};

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc::unbounded_channel;

use crate::browse::{BrowseController, BrowseQuery};
use crate::catalog::CatalogClient;
use crate::config::Config;

use events::{AppEvent, EventHandler};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the screen until the user quits.
pub async fn run(config: Config, query: BrowseQuery) -> anyhow::Result<()> {
    let credential = config.catalog.resolve_credential();
    let client = Arc::new(CatalogClient::new(&config.catalog, credential));
    let (outcome_tx, mut outcome_rx) = unbounded_channel();
    let controller = BrowseController::new(client, outcome_tx, query);
    let mut app = App::new(controller, config.catalog.poster_base_url.clone());

    let (mut terminal, guard) = terminal_guard::setup_terminal().context("terminal setup failed")?;
    let mut events = EventHandler::new(TICK_RATE);

    app.start();
    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => input::handle_key(&mut app, key),
                Some(AppEvent::Tick) => app.on_tick(),
                Some(AppEvent::Resize) => {}
                None => break,
            },
            outcome = outcome_rx.recv() => match outcome {
                Some(outcome) => app.on_fetch(outcome),
                None => break,
            },
        }
    }

    drop(guard);
    Ok(())
}
