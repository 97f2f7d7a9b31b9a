use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::config::{COLOR_KEYS, Config, home_dir};
use crate::util::color::parse_hex_color;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("unknown color \"{0}\" in [colors]")]
    UnknownColor(String),
    #[error("invalid color value \"{value}\" for \"{key}\" (expected #RRGGBB)")]
    InvalidColor { key: String, value: String },
}

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".config"));
    config_dir.join("todolist").join("config.toml")
}

/// Read the config from the default location
pub fn read_config() -> Result<Config, ConfigError> {
    read_config_from(&config_path())
}

/// Read and validate a config file. A missing file yields the defaults;
/// anything present must be fully understood.
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Reject color overrides the theme would not understand
fn validate(config: &Config) -> Result<(), ConfigError> {
    for (key, value) in &config.colors {
        if !COLOR_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnknownColor(key.clone()));
        }
        if parse_hex_color(value).is_none() {
            return Err(ConfigError::InvalidColor {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}
