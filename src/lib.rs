//! soyroute Library
//!
//! Terminal dashboard comparing the freight cost of soy shipments out of
//! Sorriso (MT) under four contingency scenarios.

pub mod summary;

pub use soyroute_app as app;
pub use soyroute_core as core;
pub use soyroute_tui as tui;

pub use soyroute_tui::RunOptions;

use soyroute_core::prelude::*;

/// Run the interactive dashboard
///
/// Logging goes to a file since the TUI owns the terminal.
pub async fn run(options: RunOptions) -> Result<()> {
    soyroute_core::logging::init()?;

    if let Ok(path) = soyroute_core::logging::get_current_log_file() {
        info!("Log file: {}", path.display());
    }

    let result = soyroute_tui::run(options).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("soyroute exiting");
    result
}
