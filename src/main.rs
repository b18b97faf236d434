//! soyroute - Terminal dashboard for soy freight contingency scenarios
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use soyroute::summary::{self, SummaryFormat};
use soyroute::RunOptions;

/// soyroute - Freight contingency dashboard
#[derive(Parser, Debug)]
#[command(name = "soyroute")]
#[command(about = "Terminal dashboard for soy freight contingency scenarios", long_about = None)]
struct Args {
    /// Directory for config.toml and the persisted view
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Start on this view (e.g. dashboard, view-3)
    #[arg(long, value_name = "ID")]
    view: Option<String>,

    /// Forget the persisted view before starting
    #[arg(long)]
    reset: bool,

    /// Print the executive summary and exit
    #[arg(long)]
    summary: bool,

    /// Print the summary as JSON and exit
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.json {
        summary::print(SummaryFormat::Json)?;
        return Ok(());
    }
    if args.summary {
        summary::print(SummaryFormat::Text)?;
        return Ok(());
    }

    soyroute::run(RunOptions {
        config_dir: args.config_dir,
        start_view: args.view,
        reset: args.reset,
    })
    .await?;
    Ok(())
}
