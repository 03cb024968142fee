use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use std::path::PathBuf;

use crate::models::{OutputLanguage, SummaryStyle};
use crate::network::DEFAULT_BACKEND_URL;

pub const ENV_PREFIX: &str = "TUBESUM";
const CONFIG_FILE_NAME: &str = "tubesum.toml";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub backend_url: String,
    pub default_language: OutputLanguage,
    pub default_summary_style: SummaryStyle,
    pub log_file: String,
    pub log_level: String,
}

/// Values taken from the command line. They win over every other source.
#[derive(Debug, Default)]
pub struct Overrides {
    pub backend_url: Option<String>,
    pub language: Option<OutputLanguage>,
    pub summary_style: Option<SummaryStyle>,
    pub log_file: Option<String>,
}

impl Settings {
    pub fn new(overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut files: Vec<Box<dyn Source + Send + Sync>> = Vec::new();
        // 1. User's global config. Optional.
        if let Some(user_config_path) = get_user_config_path() {
            files.push(Box::new(File::from(user_config_path).required(false)));
        }
        // 2. Local tubesum.toml from CWD. Optional override.
        files.push(Box::new(File::with_name(CONFIG_FILE_NAME).required(false)));

        Self::build(files, Environment::with_prefix(ENV_PREFIX), overrides)
    }

    fn build(
        files: Vec<Box<dyn Source + Send + Sync>>,
        env: Environment,
        overrides: &Overrides,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .set_default("default_language", OutputLanguage::default().as_wire())?
            .set_default("default_summary_style", SummaryStyle::default().as_wire())?
            .set_default("log_file", "tubesum.log")?
            .set_default("log_level", "info")?
            .add_source(files)
            .add_source(env)
            .set_override_option("backend_url", overrides.backend_url.clone())?
            .set_override_option("default_language", overrides.language.map(|l| l.as_wire()))?
            .set_override_option(
                "default_summary_style",
                overrides.summary_style.map(|s| s.as_wire()),
            )?
            .set_override_option("log_file", overrides.log_file.clone())?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;
        if settings.backend_url.trim().is_empty() {
            settings.backend_url = DEFAULT_BACKEND_URL.to_string();
        }
        Ok(settings)
    }

    /// Log file path with `~` and environment variables expanded.
    pub fn log_path(&self) -> PathBuf {
        match shellexpand::full(&self.log_file) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(&self.log_file),
        }
    }
}

pub fn get_user_config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".config");
    path.push("tubesum");
    path.push(CONFIG_FILE_NAME);
    Some(path)
}
