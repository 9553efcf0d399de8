//! Key custody.
//!
//! The secret key is generated locally from a CSPRNG and never transmitted;
//! only signatures and the public key leave the machine. Custody is a
//! pluggable [`KeyStore`] capability so the file-backed store can be swapped
//! for a hardware-backed or encrypted one without touching the
//! authenticator.

mod file;
mod memory;

pub use file::FileKeyStore;
pub use memory::MemoryKeyStore;

use common::crypto::SecretKey;

#[derive(Debug, thiserror::Error)]
pub enum KeyStoreError {
    /// Storage is inaccessible or holds unusable key material. Fatal to any
    /// authenticated action.
    #[error("key unavailable: {0}")]
    KeyUnavailable(String),
}

/// Durable custody of the client's one secret key.
pub trait KeyStore {
    fn load(&self) -> Result<Option<SecretKey>, KeyStoreError>;
    fn save(&self, key: &SecretKey) -> Result<(), KeyStoreError>;
    fn clear(&self) -> Result<(), KeyStoreError>;
}

/// Return the persisted key, generating and persisting one first if the
/// store is empty. Idempotent once a key exists: the store is written
/// exactly once per new key.
pub fn load_or_create<S: KeyStore>(store: &S) -> Result<SecretKey, KeyStoreError> {
    if let Some(key) = store.load()? {
        return Ok(key);
    }

    let key = SecretKey::generate();
    store.save(&key)?;
    tracing::info!(identifier = %key.public().identifier(), "generated new identity key");
    Ok(key)
}
