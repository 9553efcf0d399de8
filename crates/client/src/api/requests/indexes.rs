use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::api::paths::PathError;
use crate::api::ApiRequest;

/// A named collection of topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub topics: Vec<String>,
}

/// List all index names: GET `/all-indexes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllIndexesRequest;

pub type AllIndexesResponse = Vec<String>;

impl ApiRequest for AllIndexesRequest {
    type Response = AllIndexesResponse;

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        let url = base_url
            .join("/all-indexes")
            .map_err(|e| PathError::InvalidArgument(e.to_string()))?;
        Ok(client.get(url))
    }
}

/// Fetch one index: GET `/index/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetIndexRequest {
    /// Index name
    pub name: String,
}

impl ApiRequest for GetIndexRequest {
    type Response = Index;

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        if self.name.is_empty() {
            return Err(PathError::InvalidArgument("empty index name".into()));
        }
        let url = base_url
            .join(&format!("/index/{}", self.name))
            .map_err(|e| PathError::InvalidArgument(e.to_string()))?;
        Ok(client.get(url))
    }
}

/// Create an index: POST `/new-index`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIndexRequest {
    /// Index name
    pub name: String,

    /// Topics the index collects
    pub topics: Vec<String>,
}

impl ApiRequest for CreateIndexRequest {
    type Response = ();

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        if self.name.is_empty() {
            return Err(PathError::InvalidArgument("empty index name".into()));
        }
        let url = base_url
            .join("/new-index")
            .map_err(|e| PathError::InvalidArgument(e.to_string()))?;
        Ok(client.post(url).json(&self))
    }
}
