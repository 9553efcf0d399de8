/**
 * Cryptographic types and operations.
 *  - Public and secret key implementations
 *  - Identifier derivation for identity-scoped
 *    resource paths
 */
pub mod crypto;

pub mod prelude {
    pub use crate::crypto::{Identifier, KeyError, PublicKey, SecretKey};
}
