use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use common::crypto::SecretKey;

use super::{KeyStore, KeyStoreError};

/// PEM file custody, the default store (`key.pem` in the state directory).
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl KeyStore for FileKeyStore {
    fn load(&self) -> Result<Option<SecretKey>, KeyStoreError> {
        let pem = match fs::read_to_string(&self.path) {
            Ok(pem) => pem,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(KeyStoreError::KeyUnavailable(e.to_string())),
        };

        let key = SecretKey::from_pem(&pem)
            .map_err(|e| KeyStoreError::KeyUnavailable(e.to_string()))?;
        Ok(Some(key))
    }

    fn save(&self, key: &SecretKey) -> Result<(), KeyStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| KeyStoreError::KeyUnavailable(e.to_string()))?;
        }
        fs::write(&self.path, key.to_pem())
            .map_err(|e| KeyStoreError::KeyUnavailable(e.to_string()))
    }

    fn clear(&self) -> Result<(), KeyStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyStoreError::KeyUnavailable(e.to_string())),
        }
    }
}
