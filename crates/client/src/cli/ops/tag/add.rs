use clap::Args;

use pict_client::api::requests::AddTagRequest;
use pict_client::api::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Add {
    /// Topic to tag
    #[arg(long)]
    pub topic: String,

    /// Tag to add
    #[arg(long)]
    pub tag: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TagAddError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Add {
    type Error = TagAddError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = AddTagRequest {
            topic: self.topic.clone(),
            tag: self.tag.clone(),
        };
        ctx.client.dispatch(request).await?;

        Ok(format!("Tagged topic '{}' with '{}'", self.topic, self.tag))
    }
}
