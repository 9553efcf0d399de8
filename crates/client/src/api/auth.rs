//! Challenge-response authentication.
//!
//! One attempt walks `Idle → ChallengeRequested → Signed → Submitted →
//! {Authenticated | Failed}`:
//!
//! 1. GET `/generate-challenge` (credentials included) for a base64 challenge
//! 2. decode and sign the raw challenge bytes with the secret key
//! 3. POST `/authenticate` with the signature and base64 public key
//!
//! On success the server sets a session cookie, which the [`ApiClient`]'s
//! jar carries on every later request, and the caller receives a [`Session`]
//! capability gating identity-scoped calls. The authenticator never retries
//! and never caches challenges; a failed or abandoned attempt is simply
//! followed by a fresh one starting at `Idle`. Retry policy belongs to the
//! caller.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::StatusCode;
use serde::Serialize;

use common::crypto::{Identifier, SecretKey};

use super::client::ApiClient;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("challenge fetch failed with status {status}: {body}")]
    ChallengeFetch { status: StatusCode, body: String },
    #[error("challenge payload is not valid base64: {0}")]
    ChallengeDecode(#[from] base64::DecodeError),
    #[error("authentication rejected with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Where an authentication attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Idle,
    ChallengeRequested,
    Signed,
    Submitted,
    Authenticated,
    Failed,
}

/// Proof of a completed challenge-response exchange.
///
/// The session credential itself lives in the client's cookie jar; this
/// value records the identity the session was established for and is
/// required by every scoped resource call. Only [`Authenticator`] constructs
/// it, so unauthenticated code cannot reach a scoped path.
#[derive(Debug, Clone)]
pub struct Session {
    identifier: Identifier,
}

impl Session {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}

#[derive(Debug, Serialize)]
struct AuthenticateBody {
    signature: Vec<u8>,
    public_key: String,
}

pub struct Authenticator<'a> {
    client: &'a ApiClient,
    phase: AuthPhase,
}

impl<'a> Authenticator<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            phase: AuthPhase::Idle,
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// Run one full challenge-response exchange.
    ///
    /// Taking `&mut self` keeps attempts on a single authenticator strictly
    /// sequential; two concurrent attempts would race their challenges.
    pub async fn authenticate(&mut self, secret: &SecretKey) -> Result<Session, AuthError> {
        self.phase = AuthPhase::Idle;

        let challenge = self.fetch_challenge().await?;
        let signature = self.sign_challenge(&challenge, secret)?;
        self.submit(signature, secret).await
    }

    async fn fetch_challenge(&mut self) -> Result<String, AuthError> {
        self.phase = AuthPhase::ChallengeRequested;

        let url = self.client.base_url().join("/generate-challenge")?;
        let response = self.client.http_client().get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "challenge fetch failed");
            self.phase = AuthPhase::Failed;
            return Err(AuthError::ChallengeFetch { status, body });
        }

        Ok(response.text().await?)
    }

    /// Decode the transport encoding and sign the raw challenge bytes.
    /// No network I/O happens here.
    fn sign_challenge(
        &mut self,
        challenge: &str,
        secret: &SecretKey,
    ) -> Result<common::crypto::Signature, AuthError> {
        let challenge_bytes = BASE64.decode(challenge.trim()).inspect_err(|_| {
            self.phase = AuthPhase::Failed;
        })?;

        let signature = secret.sign(&challenge_bytes);
        self.phase = AuthPhase::Signed;
        Ok(signature)
    }

    async fn submit(
        &mut self,
        signature: common::crypto::Signature,
        secret: &SecretKey,
    ) -> Result<Session, AuthError> {
        let public_key = secret.public();
        let body = AuthenticateBody {
            signature: signature.to_bytes().to_vec(),
            public_key: public_key.to_base64(),
        };

        let url = self.client.base_url().join("/authenticate")?;
        self.phase = AuthPhase::Submitted;
        let response = self.client.http_client().post(url).json(&body).send().await?;

        if response.status().is_success() {
            self.phase = AuthPhase::Authenticated;
            let identifier = public_key.identifier();
            tracing::debug!(%identifier, "authenticated");
            Ok(Session { identifier })
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "authentication rejected");
            self.phase = AuthPhase::Failed;
            Err(AuthError::Rejected { status, body })
        }
    }
}
