mod app;
mod config;
mod effects;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::LevelFilter;
use triage_core::ModelChoice;
use triage_engine::UnboundProcessor;
use triage_logging::triage_info;

pub use config::LogSetting;

/// Everything the command line can override.
pub struct RunOptions {
    pub folder: Option<PathBuf>,
    pub model: Option<ModelChoice>,
    pub config: Option<PathBuf>,
    pub list_only: bool,
    pub log: Option<LogSetting>,
    pub debug: bool,
}

pub fn run(options: RunOptions) -> Result<()> {
    let config = config::load_config(options.config.as_deref());

    // Headless listing prints to stdout, so logs go to the terminal there.
    let default_log = if options.list_only {
        LogSetting::Terminal
    } else {
        config.log
    };
    let level = if options.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    triage_logging::initialize(
        options.log.unwrap_or(default_log).into(),
        level,
        &config.log_file,
    );

    let model = options.model.unwrap_or_else(|| config.model());
    triage_info!("Starting triage with model {}", model.id());
    let mut controller =
        app::Controller::new(model, config.picker_settings(), Arc::new(UnboundProcessor));

    if options.list_only {
        let Some(folder) = options.folder else {
            anyhow::bail!("--list needs a folder argument");
        };
        return app::print_listing(&mut controller, &folder);
    }

    if let Some(folder) = options.folder {
        controller.pick(&folder);
    }
    app::run_app(controller)
}
