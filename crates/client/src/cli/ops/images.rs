use clap::Args;

use pict_client::api::requests::ListImagesRequest;
use pict_client::api::{ApiError, AuthError, Authenticator};
use pict_client::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Images {
    /// Topic to list images for
    #[arg(long)]
    pub topic: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ImagesError {
    #[error("state error: {0}")]
    State(#[from] StateError),
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Images {
    type Error = ImagesError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;
        let key = state.load_key()?;

        let mut authenticator = Authenticator::new(&ctx.client);
        let session = authenticator.authenticate(&key).await?;

        let request = ListImagesRequest {
            topic: self.topic.clone(),
        };
        let images = ctx.client.call_scoped(&session, request).await?;

        if images.is_empty() {
            Ok(format!("No images in topic '{}'", self.topic))
        } else {
            Ok(images.join("\n"))
        }
    }
}
