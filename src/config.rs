//! Start-up configuration.
//!
//! The configuration is built once in `main` and then cloned into every
//! connection worker. Nothing mutates it after start-up.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 50505;
pub const DEFAULT_ROOT: &str = ".";

/// Lowest port the server accepts; privileged ports are refused.
pub const MIN_PORT: u16 = 1025;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub root_directory: PathBuf,
}

/// On-disk shape of the YAML config file. Every field is optional so a
/// file may override only what it cares about.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    root_directory: Option<PathBuf>,
}

impl Config {
    /// Builds a config, rejecting ports outside `1025..=65535`.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        root_directory: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if port < MIN_PORT {
            return Err(ConfigError::PortOutOfRange(port));
        }
        Ok(Self {
            host: host.into(),
            port,
            root_directory: root_directory.into(),
        })
    }

    /// Loads the configuration from the process environment.
    ///
    /// `FILESERVE_CONFIG` may name a YAML file; `FILESERVE_HOST`,
    /// `FILESERVE_PORT` and `FILESERVE_ROOT` override whatever it sets.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] but with an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match lookup("FILESERVE_CONFIG") {
            Some(path) => read_file_config(Path::new(&path))?,
            None => FileConfig::default(),
        };

        let host = lookup("FILESERVE_HOST")
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("FILESERVE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let root = lookup("FILESERVE_ROOT")
            .map(PathBuf::from)
            .or(file.root_directory)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        Self::new(host, port, root)
    }

    /// Parses a YAML document and validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = serde_yaml::from_str(yaml)?;
        Self::new(
            file.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            file.port.unwrap_or(DEFAULT_PORT),
            file.root_directory
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
        )
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&raw)?)
}
