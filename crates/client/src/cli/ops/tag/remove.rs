use clap::Args;

use pict_client::api::requests::RemoveTagRequest;
use pict_client::api::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Remove {
    /// Topic to untag
    #[arg(long)]
    pub topic: String,

    /// Tag to remove
    #[arg(long)]
    pub tag: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TagRemoveError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Remove {
    type Error = TagRemoveError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = RemoveTagRequest {
            topic: self.topic.clone(),
            tag: self.tag.clone(),
        };
        ctx.client.dispatch(request).await?;

        Ok(format!(
            "Removed tag '{}' from topic '{}'",
            self.tag, self.topic
        ))
    }
}
