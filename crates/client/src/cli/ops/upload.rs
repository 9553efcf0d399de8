use std::path::PathBuf;

use clap::Args;

use pict_client::api::requests::UploadImageRequest;
use pict_client::api::{ApiError, AuthError, Authenticator};
use pict_client::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Upload {
    /// Topic to upload into
    #[arg(long)]
    pub topic: String,

    /// Image files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("state error: {0}")]
    State(#[from] StateError),
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Upload {
    type Error = UploadError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;
        let key = state.load_key()?;

        // One session for the whole batch
        let mut authenticator = Authenticator::new(&ctx.client);
        let session = authenticator.authenticate(&key).await?;

        for path in &self.files {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| UploadError::NoFileName(path.clone()))?;
            let bytes = tokio::fs::read(path).await?;

            tracing::debug!(file = %file_name, topic = %self.topic, "uploading");
            let request = UploadImageRequest {
                topic: self.topic.clone(),
                file_name,
                bytes,
            };
            ctx.client.dispatch_scoped(&session, request).await?;
        }

        Ok(format!(
            "Uploaded {} file(s) to topic '{}'",
            self.files.len(),
            self.topic
        ))
    }
}
