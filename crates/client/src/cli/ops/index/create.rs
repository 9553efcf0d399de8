use clap::Args;

use pict_client::api::requests::CreateIndexRequest;
use pict_client::api::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Create {
    /// Index name
    #[arg(long)]
    pub name: String,

    /// Topics the index collects (repeat for each topic)
    #[arg(long)]
    pub topics: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IndexCreateError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Create {
    type Error = IndexCreateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = CreateIndexRequest {
            name: self.name.clone(),
            topics: self.topics.clone(),
        };
        ctx.client.dispatch(request).await?;

        Ok(format!(
            "Created index '{}' with {} topic(s)",
            self.name,
            self.topics.len()
        ))
    }
}
