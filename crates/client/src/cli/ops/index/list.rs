use clap::Args;

use pict_client::api::requests::AllIndexesRequest;
use pict_client::api::ApiError;

#[derive(Args, Debug, Clone)]
pub struct List;

#[derive(Debug, thiserror::Error)]
pub enum IndexListError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for List {
    type Error = IndexListError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let indexes = ctx.client.call(AllIndexesRequest).await?;

        if indexes.is_empty() {
            Ok("No indexes found".to_string())
        } else {
            Ok(indexes.join("\n"))
        }
    }
}
