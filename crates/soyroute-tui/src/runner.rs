//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: loads settings and storage, starts the page, restores the terminal
//! - `run_loop`: drains background messages, draws, polls the terminal

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use soyroute_app::actions::NarrationTaskMap;
use soyroute_app::config::{default_config_dir, default_data_dir, init_config_dir, load_settings, Settings};
use soyroute_app::process::process_message;
use soyroute_app::signals;
use soyroute_app::{AppState, FileStore, KeyValueStore, Message, MemoryStore, LAST_VIEW_KEY};
use soyroute_core::prelude::*;

use super::{event, render};

/// Command line choices that shape startup
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory holding `config.toml` and the page storage
    pub config_dir: Option<PathBuf>,
    /// View to show instead of the persisted one
    pub start_view: Option<String>,
    /// Forget the persisted view before starting
    pub reset: bool,
}

/// Install a panic hook that restores the terminal
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

fn load_config(options: &RunOptions) -> Settings {
    let Some(config_dir) = options.config_dir.clone().or_else(default_config_dir) else {
        warn!("No configuration directory available, using defaults");
        return Settings::default();
    };
    if let Err(e) = init_config_dir(&config_dir) {
        warn!("Could not create default config in {}: {}", config_dir.display(), e);
    }
    load_settings(&config_dir)
}

/// Durable page storage; in memory when no directory is available
fn open_store(options: &RunOptions) -> Box<dyn KeyValueStore> {
    let mut store: Box<dyn KeyValueStore> =
        match options.config_dir.clone().or_else(default_data_dir) {
            Some(dir) => {
                let store = FileStore::open(&dir);
                info!("Page storage at {}", store.path().display());
                Box::new(store)
            }
            None => {
                warn!("No data directory available, the selected view will not persist");
                Box::new(MemoryStore::new())
            }
        };

    if options.reset {
        match store.remove(LAST_VIEW_KEY) {
            Ok(()) => info!("Cleared persisted view"),
            Err(e) => warn!("Failed to clear persisted view: {}", e),
        }
    }
    store
}

/// Run the dashboard until the user quits
pub async fn run(options: RunOptions) -> Result<()> {
    install_panic_hook();

    let settings = load_config(&options);
    info!(
        "Loaded settings: restore_last_view={} default_view={}",
        settings.behavior.restore_last_view, settings.behavior.default_view
    );
    let store = open_store(&options);

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::with_store(settings, store).with_startup_view(options.start_view);

    // Unified message channel (signal handler, narration tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let narration_tasks: NarrationTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

    // Document ready
    process_message(&mut state, Message::PageLoaded, &msg_tx, &narration_tasks);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, narration_tasks.clone());

    // Abandon narrations still in flight
    if let Ok(mut guard) = narration_tasks.lock() {
        for (_, handle) in guard.drain() {
            handle.abort();
        }
    }

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    result.and(restored)
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    narration_tasks: NarrationTaskMap,
) -> Result<()> {
    while !state.should_quit() {
        // Process background messages (narration pacing, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &narration_tasks);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("Failed to draw: {}", e)))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &narration_tasks);
        }
    }

    info!("Event loop finished");
    Ok(())
}
