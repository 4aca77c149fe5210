//! Configuration for Termodoro.
//!
//! Read from `~/.termodoro/config.toml`, or from the file named by the
//! `TERMODORO_CONFIG` environment variable. Every table and key is optional:
//!
//! ```toml
//! [general]
//! work-minutes = 30
//! short-break-minutes = 5
//! long-break-minutes = 15
//! before-long-rounds = 4
//!
//! [display]
//! show-completed = true
//! show-next-long = true
//! show-digital = true
//! show-analog = true
//! hand-length = 0.5
//! high-contrast = false
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use termodoro_types::{
    DisplayOptions, HandLength, HandLengthError, SessionSettings, SettingsError,
};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TERMODORO_CONFIG";

// bool::default() is false, so only true needs a fn
const fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermodoroConfig {
    pub general: Option<GeneralConfig>,
    pub display: Option<DisplayConfig>,
}

/// Phase durations, in whole minutes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneralConfig {
    pub work_minutes: Option<u64>,
    pub short_break_minutes: Option<u64>,
    pub long_break_minutes: Option<u64>,
    /// Work rounds between long breaks. Must be at least 1.
    pub before_long_rounds: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_completed: bool,
    #[serde(default = "default_true")]
    pub show_next_long: bool,
    #[serde(default = "default_true")]
    pub show_digital: bool,
    #[serde(default = "default_true")]
    pub show_analog: bool,
    /// Fraction of the radius; values above 1 draw a full-radius hand.
    pub hand_length: Option<f64>,
    #[serde(default)]
    pub high_contrast: bool,
}

/// Validated values ready for the session and the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    pub session: SessionSettings,
    pub display: DisplayOptions,
}

#[derive(Debug, Error)]
pub enum InvalidValue {
    #[error(transparent)]
    Session(#[from] SettingsError),
    #[error("hand-length: {0}")]
    HandLength(#[from] HandLengthError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value in config at {}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidValue,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

impl TermodoroConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads the config at `path`, or `None` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Applies defaults for missing keys and validates the rest.
    pub fn resolve(&self) -> Result<Settings, InvalidValue> {
        let general = self.general.as_ref();
        let session = SessionSettings::from_minutes(
            general
                .and_then(|cfg| cfg.work_minutes)
                .unwrap_or(SessionSettings::DEFAULT_WORK_MINUTES),
            general
                .and_then(|cfg| cfg.short_break_minutes)
                .unwrap_or(SessionSettings::DEFAULT_SHORT_BREAK_MINUTES),
            general
                .and_then(|cfg| cfg.long_break_minutes)
                .unwrap_or(SessionSettings::DEFAULT_LONG_BREAK_MINUTES),
            general
                .and_then(|cfg| cfg.before_long_rounds)
                .unwrap_or(SessionSettings::DEFAULT_BEFORE_LONG_ROUNDS),
        )?;

        let display = match &self.display {
            Some(cfg) => DisplayOptions {
                show_completed: cfg.show_completed,
                show_next_long: cfg.show_next_long,
                show_digital: cfg.show_digital,
                show_analog: cfg.show_analog,
                hand_length: cfg
                    .hand_length
                    .map(HandLength::new)
                    .transpose()?
                    .unwrap_or_default(),
                high_contrast: cfg.high_contrast,
            },
            None => DisplayOptions::default(),
        };

        Ok(Settings { session, display })
    }
}

/// Reads and validates the config at `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let Some(config) = TermodoroConfig::load_from(path)? else {
        return Ok(Settings::default());
    };
    config.resolve().map_err(|source| {
        tracing::warn!("Invalid config at {:?}: {}", path, source);
        ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Like [`load_settings_from`] at the default location.
pub fn load_settings() -> Result<Settings, ConfigError> {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".termodoro").join("config.toml"))
}
