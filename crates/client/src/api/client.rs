use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use url::Url;

use super::auth::Session;
use super::error::ApiError;
use super::{ApiRequest, ScopedApiRequest};

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub remote: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        // The cookie jar is the ambient carrier for the session credential:
        // /authenticate sets it, every later request sends it back.
        let client = Client::builder()
            .default_headers(default_headers)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    /// Execute a request whose success response is a JSON body.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client)?;
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Execute a request whose success response carries no JSON body.
    pub async fn dispatch<T: ApiRequest>(&self, request: T) -> Result<(), ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client)?;
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Execute an identity-scoped request with a JSON success body.
    ///
    /// The path is composed from the session's identifier; the session
    /// cookie rides along in the jar.
    pub async fn call_scoped<T: ScopedApiRequest>(
        &self,
        session: &Session,
        request: T,
    ) -> Result<T::Response, ApiError> {
        let request_builder =
            request.build_request(&self.remote, session.identifier(), &self.client)?;
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Execute an identity-scoped request with no JSON success body.
    pub async fn dispatch_scoped<T: ScopedApiRequest>(
        &self,
        session: &Session,
        request: T,
    ) -> Result<(), ApiError> {
        let request_builder =
            request.build_request(&self.remote, session.identifier(), &self.client)?;
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> &Client {
        &self.client
    }
}
