//! Optional `triage.ron` configuration.
//!
//! A missing file means defaults; a file that fails to parse is reported in
//! the log and also falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use triage_core::ModelChoice;
use triage_engine::PickerSettings;
use triage_logging::{triage_info, triage_warn, LogDestination};

pub const CONFIG_FILENAME: &str = "triage.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogSetting {
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogSetting> for LogDestination {
    fn from(setting: LogSetting) -> Self {
        match setting {
            LogSetting::File => LogDestination::File,
            LogSetting::Terminal => LogDestination::Terminal,
            LogSetting::Both => LogDestination::Both,
            LogSetting::Off => LogDestination::Off,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        let settings = PickerSettings::default();
        Self {
            follow_links: settings.follow_links,
            max_depth: settings.max_depth,
            include_hidden: settings.include_hidden,
        }
    }
}

impl From<&PickerConfig> for PickerSettings {
    fn from(config: &PickerConfig) -> Self {
        PickerSettings {
            follow_links: config.follow_links,
            max_depth: config.max_depth,
            include_hidden: config.include_hidden,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub default_model: String,
    pub picker: PickerConfig,
    pub log: LogSetting,
    pub log_file: PathBuf,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            default_model: ModelChoice::default().id().to_string(),
            picker: PickerConfig::default(),
            log: LogSetting::File,
            log_file: PathBuf::from("./triage.log"),
        }
    }
}

impl TriageConfig {
    /// Configured model, or the default when the id is not recognised.
    pub fn model(&self) -> ModelChoice {
        match self.default_model.parse() {
            Ok(model) => model,
            Err(err) => {
                triage_warn!("Ignoring configured model: {}", err);
                ModelChoice::default()
            }
        }
    }

    pub fn picker_settings(&self) -> PickerSettings {
        PickerSettings::from(&self.picker)
    }
}

/// Loads `explicit` if given, otherwise `./triage.ron` when it exists.
pub fn load_config(explicit: Option<&Path>) -> TriageConfig {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if explicit.is_some() {
                triage_warn!("Config file {:?} not found; using defaults", path);
            }
            return TriageConfig::default();
        }
        Err(err) => {
            triage_warn!("Failed to read config from {:?}: {}", path, err);
            return TriageConfig::default();
        }
    };

    match parse_config(&content) {
        Ok(config) => {
            triage_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            triage_warn!("Failed to parse config from {:?}: {}", path, err);
            TriageConfig::default()
        }
    }
}

pub fn parse_config(content: &str) -> Result<TriageConfig, ron::error::SpannedError> {
    ron::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_in_defaults() {
        let config =
            parse_config("(default_model: \"claude-3-opus\", picker: (include_hidden: false))")
                .unwrap();

        assert_eq!(config.model(), ModelChoice::Claude3Opus);
        assert!(!config.picker.include_hidden);
        assert!(!config.picker.follow_links);
        assert_eq!(config.picker.max_depth, None);
        assert_eq!(config.log, LogSetting::File);
    }

    #[test]
    fn unknown_model_falls_back_to_default() {
        let config = parse_config("(default_model: \"gpt-4\")").unwrap();
        assert_eq!(config.model(), ModelChoice::Claude3Sonnet);
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(parse_config("(picker: 12)").is_err());
    }

    #[test]
    fn missing_file_gives_defaults_and_bad_file_too() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("absent.ron");
        assert_eq!(load_config(Some(&missing)), TriageConfig::default());

        let bad = temp.path().join("bad.ron");
        fs::write(&bad, "not ron at all (").unwrap();
        assert_eq!(load_config(Some(&bad)), TriageConfig::default());

        let good = temp.path().join("good.ron");
        fs::write(&good, "(log: off, picker: (max_depth: Some(2)))").unwrap();
        let config = load_config(Some(&good));
        assert_eq!(config.log, LogSetting::Off);
        assert_eq!(config.picker_settings().max_depth, Some(2));
    }
}
