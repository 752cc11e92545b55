use std::path::PathBuf;
use thiserror::Error;

use crate::pdf::SYSTEM_FONT_DIRS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Extra directory searched for PDF fonts before the system paths.
    pub font_dir: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            font_dir: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let font_dir = lookup("FONT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(|dir| base_dir.join(dir));
        let static_dir = base_dir.join(
            lookup("STATIC_DIR").unwrap_or_else(|| defaults.static_dir.display().to_string()),
        );

        Ok(Self {
            host,
            port,
            font_dir,
            static_dir,
        })
    }

    /// Font search order for PDF export.
    pub fn font_dirs(&self) -> Vec<PathBuf> {
        self.font_dir
            .iter()
            .cloned()
            .chain(SYSTEM_FONT_DIRS.iter().map(PathBuf::from))
            .collect()
    }
}
