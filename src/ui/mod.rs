//! Terminal host for the widgets demo.
//!
//! One task owns the [`App`] and drains a single event queue fed by the
//! input thread, the config watcher and the carousel's autoplay task.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod terminal_guard;

use anyhow::Context;
use tokio::sync::mpsc;

use crate::args::Overrides;
use crate::config::{ConfigStore, ConfigWatcher};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

const CONFIG_DEBOUNCE_MS: u64 = 200;

pub async fn run(store: ConfigStore, overrides: Overrides) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut app = App::new(store.clone(), overrides);
    let _watcher = match ConfigWatcher::start(store, tx.clone(), CONFIG_DEBOUNCE_MS) {
        Ok(watcher) => Some(watcher),
        Err(err) => {
            tracing::warn!(error = %err, "Config hot-reload disabled");
            None
        }
    };

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let input = EventHandler::spawn(tx.clone());
    app.attach(tx).context("Failed to start the carousel")?;

    loop {
        terminal.draw(|frame| {
            app.set_size(frame.area());
            render::draw(frame, &app);
        })?;
        if app.should_quit() {
            break;
        }

        let Some(event) = rx.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(key) => input::handle_key(&mut app, key),
            AppEvent::Mouse(mouse) => input::handle_mouse(&mut app, mouse),
            AppEvent::Resize(_, _) => {}
            AppEvent::Autoplay(tick) => app.on_autoplay(tick),
            AppEvent::ConfigReload => app.on_config_reload(),
            AppEvent::ConfigError(message) => app.on_config_error(message),
        }
    }

    app.detach();
    drop(input);
    drop(guard);
    Ok(())
}
