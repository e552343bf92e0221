//! Configuration loading for the nori playground.
//!
//! Settings live in `config.toml` under the platform config directory
//! (e.g. `~/.config/nori/` on Linux). A missing file yields the defaults;
//! a malformed file is an error so typos do not silently vanish.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or parsing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme applied at startup.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Event-poll timeout of the main loop, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Whether the spinner starts in its active state.
    #[serde(default)]
    pub start_spinner: bool,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
            start_spinner: false,
        }
    }
}

impl Config {
    /// The platform config file path, if a home directory is resolvable.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "nori").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the platform config path; defaults if the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        toml::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "light");
        assert_eq!(config.tick_rate_ms, 100);
        assert!(!config.start_spinner);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/nori/config.toml")).unwrap();
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = std::env::temp_dir().join("nori-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(&path, "theme = [not toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        let _ = fs::remove_file(&path);
    }
}
