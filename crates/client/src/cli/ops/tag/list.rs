use clap::Args;

use pict_client::api::requests::ListTagsRequest;
use pict_client::api::ApiError;

#[derive(Args, Debug, Clone)]
pub struct List {
    /// Topic to list tags for
    #[arg(long)]
    pub topic: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TagListError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for List {
    type Error = TagListError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = ListTagsRequest {
            topic: self.topic.clone(),
        };
        let tags = ctx.client.call(request).await?;

        if tags.is_empty() {
            Ok(format!("No tags on topic '{}'", self.topic))
        } else {
            Ok(tags.join("\n"))
        }
    }
}
