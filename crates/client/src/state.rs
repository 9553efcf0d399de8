use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use common::crypto::SecretKey;

use crate::keystore::{self, FileKeyStore, KeyStoreError};

pub const APP_NAME: &str = "pict";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const KEY_FILE_NAME: &str = "key.pem";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:2342";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the image server
    #[serde(default = "default_server_url")]
    pub server_url: Url,
}

fn default_server_url() -> Url {
    Url::parse(DEFAULT_SERVER_URL).expect("hardcoded URL must parse")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the pict directory (~/.pict)
    pub pict_dir: PathBuf,
    /// Path to the identity key PEM file
    pub key_path: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the pict directory path (custom or default ~/.pict)
    pub fn pict_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Check if the pict directory exists
    pub fn exists(custom_path: Option<PathBuf>) -> Result<bool, StateError> {
        let pict_dir = Self::pict_dir(custom_path)?;
        Ok(pict_dir.exists())
    }

    /// Initialize a new pict state directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let pict_dir = Self::pict_dir(custom_path)?;

        if pict_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&pict_dir)?;

        // Generate and persist the identity key through the keystore
        let key_path = pict_dir.join(KEY_FILE_NAME);
        keystore::load_or_create(&FileKeyStore::new(&key_path))?;

        // Create config (use provided or default)
        let config = config.unwrap_or_default();
        let config_path = pict_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            pict_dir,
            key_path,
            config_path,
            config,
        })
    }

    /// Load existing state from the pict directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let pict_dir = Self::pict_dir(custom_path)?;

        if !pict_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let key_path = pict_dir.join(KEY_FILE_NAME);
        let config_path = pict_dir.join(CONFIG_FILE_NAME);

        if !key_path.exists() {
            return Err(StateError::MissingFile(KEY_FILE_NAME.to_string()));
        }
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            pict_dir,
            key_path,
            config_path,
            config,
        })
    }

    /// The custody backing this state directory
    pub fn keystore(&self) -> FileKeyStore {
        FileKeyStore::new(&self.key_path)
    }

    /// Load the identity key from the key file
    pub fn load_key(&self) -> Result<SecretKey, StateError> {
        Ok(keystore::load_or_create(&self.keystore())?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("pict directory not initialized. Run 'pict init' first")]
    NotInitialized,

    #[error("pict directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error(transparent)]
    Key(#[from] KeyStoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
