use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::crypto::Identifier;

use crate::api::paths::{resource_path, PathError};
use crate::api::ScopedApiRequest;

/// List image names in a topic: GET `/{id}/{topic}/images`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListImagesRequest {
    pub topic: String,
}

pub type ListImagesResponse = Vec<String>;

impl ScopedApiRequest for ListImagesRequest {
    type Response = ListImagesResponse;

    fn build_request(
        self,
        base_url: &Url,
        identifier: &Identifier,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        let url = resource_path(base_url, identifier, &self.topic, "images")?;
        Ok(client.get(url))
    }
}

/// Upload one image: POST `/{id}/{topic}/new-image` (multipart)
#[derive(Debug, Clone)]
pub struct UploadImageRequest {
    pub topic: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ScopedApiRequest for UploadImageRequest {
    type Response = ();

    fn build_request(
        self,
        base_url: &Url,
        identifier: &Identifier,
        client: &Client,
    ) -> Result<RequestBuilder, PathError> {
        let url = resource_path(base_url, identifier, &self.topic, "new-image")?;

        let mime = mime_guess::from_path(&self.file_name).first_or_octet_stream();
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(mime.as_ref())
            .map_err(|e| PathError::InvalidArgument(e.to_string()))?;
        let form = Form::new().part("file", part);

        Ok(client.post(url).multipart(form))
    }
}
