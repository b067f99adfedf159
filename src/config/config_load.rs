// src/config/config_load.rs
//
// loading to config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{AnimationConfig, LoggingConfig, StyleConfig, WindowConfig};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Looks next to the executable first, then in the working directory.
    /// No file at all means defaults; a broken file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn locate() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));

        exe_config
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [window]
            title = "boxes"
            width = 800
            height = 600

            [style]
            font_size = 12
            box_color = [1, 2, 3]

            [animation]
            max_frame_delta = 0.05

            [logging]
            filter = "springbox=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "boxes");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.style.font_size, 12);
        assert_eq!(config.style.box_color, [1, 2, 3]);
        // unset keys keep their defaults
        assert_eq!(config.style.title_font_size, 24);
        assert_eq!(config.animation.max_frame_delta, 0.05);
        assert_eq!(config.logging.filter, "springbox=debug");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_bad_file() {
        let path = std::env::temp_dir().join("springbox_bad_config.toml");
        fs::write(&path, "[window]\nwidth = \"wide\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let _ = fs::remove_file(&path);
    }
}
