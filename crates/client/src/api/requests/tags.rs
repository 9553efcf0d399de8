use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::api::paths::{topic_path, PathError};
use crate::api::ApiRequest;

#[derive(Debug, Serialize)]
struct TagBody {
    tag: String,
}

/// List tags on a topic: GET `/{topic}/tags`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTagsRequest {
    /// Topic to list tags for
    pub topic: String,
}

pub type ListTagsResponse = Vec<String>;

impl ApiRequest for ListTagsRequest {
    type Response = ListTagsResponse;

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        let url = topic_path(base_url, &self.topic, "tags")?;
        Ok(client.get(url))
    }
}

/// Add a tag to a topic: POST `/{topic}/new-tag`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTagRequest {
    /// Topic to tag
    pub topic: String,

    /// Tag to add
    pub tag: String,
}

impl ApiRequest for AddTagRequest {
    type Response = ();

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        let url = topic_path(base_url, &self.topic, "new-tag")?;
        Ok(client.post(url).json(&TagBody { tag: self.tag }))
    }
}

/// Remove a tag from a topic: POST `/{topic}/remove-tag`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTagRequest {
    /// Topic to untag
    pub topic: String,

    /// Tag to remove
    pub tag: String,
}

impl ApiRequest for RemoveTagRequest {
    type Response = ();

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        let url = topic_path(base_url, &self.topic, "remove-tag")?;
        Ok(client.post(url).json(&TagBody { tag: self.tag }))
    }
}
