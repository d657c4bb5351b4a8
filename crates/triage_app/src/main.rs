use std::path::PathBuf;

use clap::Parser;
use triage_core::ModelChoice;

mod platform;

use platform::{LogSetting, RunOptions};

/// Pick a folder, select files, and hand them to a processing pipeline.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder to open on start-up
    folder: Option<PathBuf>,

    /// Model id (claude-3-sonnet, claude-3-opus, claude-3-haiku)
    #[arg(short, long)]
    model: Option<ModelChoice>,

    /// Path to config file (default: ./triage.ron)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the folder listing and exit without starting the UI
    #[arg(long)]
    list: bool,

    /// Where log output goes
    #[arg(long, value_enum)]
    log: Option<LogSetting>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    platform::run(RunOptions {
        folder: args.folder,
        model: args.model,
        config: args.config,
        list_only: args.list,
        log: args.log,
        debug: args.debug,
    })
}
