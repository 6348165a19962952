//! Client configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use keyview_core::prefix::DEFAULT_ACCOUNT_PREFIX;
use keyview_core::{Bech32Config, FileKeyring, Keyring, MemoryKeyring};

use crate::error::ConfigError;

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "KEYVIEW_HOME";

/// Home directory name under the user's home
pub const DEFAULT_HOME_DIR: &str = ".keyview";

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "client.json";

/// Key store backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyringBackend {
    /// One JSON file per key under <home>/keyring-test
    #[default]
    Test,
    /// Empty in-process store
    Memory,
}

impl KeyringBackend {
    /// Open the backend rooted at `home`
    pub fn open(self, home: &Path) -> Box<dyn Keyring> {
        match self {
            KeyringBackend::Test => Box::new(FileKeyring::open(home)),
            KeyringBackend::Memory => Box::new(MemoryKeyring::new()),
        }
    }
}

/// Format of full key records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Client configuration stored at `<home>/config/client.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Account bech32 prefix; validator and consensus prefixes derive from it
    pub bech32_prefix: String,

    /// Key store backend
    pub keyring_backend: KeyringBackend,

    /// Default output format
    pub output: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bech32_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
            keyring_backend: KeyringBackend::default(),
            output: OutputFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Location of the config file under `home`
    pub fn path(home: &Path) -> PathBuf {
        home.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load from `home`, falling back to defaults when no file exists
    pub fn load_or_default(home: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(home);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Bech32 prefixes derived from `bech32_prefix`
    pub fn bech32(&self) -> Result<Bech32Config, ConfigError> {
        Bech32Config::new(self.bech32_prefix.as_str()).map_err(ConfigError::Prefix)
    }
}

/// Pick the home directory: explicit flag, then env, then `~/.keyview`
pub fn resolve_home(flag: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(home) = flag {
        return Ok(home.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR))
        .ok_or(ConfigError::NoHome(HOME_ENV))
}
