use std::sync::Mutex;

use common::crypto::SecretKey;

use super::{KeyStore, KeyStoreError};

/// In-memory custody for tests; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    key: Mutex<Option<SecretKey>>,
}

impl KeyStore for MemoryKeyStore {
    fn load(&self) -> Result<Option<SecretKey>, KeyStoreError> {
        Ok(self.key.lock().expect("keystore lock poisoned").clone())
    }

    fn save(&self, key: &SecretKey) -> Result<(), KeyStoreError> {
        *self.key.lock().expect("keystore lock poisoned") = Some(key.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), KeyStoreError> {
        *self.key.lock().expect("keystore lock poisoned") = None;
        Ok(())
    }
}
