//! eventdir configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventDirError, EventDirResult};

static DEFAULT_DATA_DIR: &str = "data";
static DEFAULT_PUBLIC_DIR: &str = "public";
static DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PUBLIC_DIR)
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Configuration at ~/.config/eventdir/config.toml, overridable with
/// `EVENTDIR_*` environment variables (e.g. `EVENTDIR_PORT=8080`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventDirConfig {
    /// Directory holding events.json and images.json
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Static assets served by the HTTP server
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for EventDirConfig {
    fn default() -> Self {
        EventDirConfig {
            data_dir: default_data_dir(),
            public_dir: default_public_dir(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl EventDirConfig {
    pub fn config_path() -> EventDirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDirError::Config("Could not determine config directory".into()))?
            .join("eventdir");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the user config file (if present) and the environment.
    pub fn load() -> EventDirResult<Self> {
        let builder = Config::builder()
            .add_source(File::from(Self::config_path()?).required(false))
            .add_source(Environment::with_prefix("EVENTDIR"));

        builder
            .build()
            .map_err(|e| EventDirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDirError::Config(e.to_string()))
    }

    /// Load from a specific file only.
    pub fn from_file(path: &Path) -> EventDirResult<Self> {
        Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| EventDirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDirError::Config(e.to_string()))
    }

    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn public_path(&self) -> PathBuf {
        expand(&self.public_dir)
    }

    pub fn to_toml(&self) -> EventDirResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventDirError::Config(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
