//! Cryptographic primitives for pict
//!
//! This module provides the identity layer the client builds on:
//!
//! - **Identity**: each client install holds one Ed25519 keypair
//!   (`SecretKey`/`PublicKey`). The secret key never leaves the machine;
//!   the public key travels as a base64 string.
//! - **Authentication**: possession of the secret key is proven by signing
//!   a server-issued challenge. The server verifies with the public key.
//! - **Scoping**: an [`Identifier`] — a fixed 8-character prefix of the
//!   base64 public key — partitions resource paths per identity. It is a
//!   routing hint only; authorization always rests on the full public key
//!   plus signature verification, never on the prefix.

mod keys;

pub use ed25519_dalek::Signature;
pub use keys::{Identifier, KeyError, PublicKey, SecretKey, IDENTIFIER_LEN};
