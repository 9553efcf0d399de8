//! HTTP surface of the image server, client side.
//!
//! [`ApiClient`] executes typed requests against the remote server. Requests
//! come in two flavors: [`ApiRequest`] for plain endpoints and
//! [`ScopedApiRequest`] for endpoints partitioned by the authenticated
//! identity, which can only be executed with a [`Session`] obtained from the
//! challenge-response exchange in [`auth`].

#[allow(clippy::module_inception)]
mod client;
mod error;

pub mod auth;
pub mod paths;
pub mod requests;

pub use auth::{AuthError, AuthPhase, Authenticator, Session};
pub use client::ApiClient;
pub use error::ApiError;
pub use paths::{resource_path, PathError};

use common::crypto::Identifier;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client)
        -> Result<RequestBuilder, PathError>;
}

/// A request whose path is partitioned by the authenticated identity.
///
/// The identifier segment is supplied by the caller's [`Session`], never by
/// the request itself, so an unauthenticated caller cannot name a scoped
/// path.
pub trait ScopedApiRequest {
    type Response: DeserializeOwned;

    fn build_request(
        self,
        base_url: &Url,
        identifier: &Identifier,
        client: &Client,
    ) -> Result<RequestBuilder, PathError>;
}
