use clap::Args;

use pict_client::api::requests::GetIndexRequest;
use pict_client::api::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Show {
    /// Index name
    #[arg(long)]
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IndexShowError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Show {
    type Error = IndexShowError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = GetIndexRequest {
            name: self.name.clone(),
        };
        let index = ctx.client.call(request).await?;

        let mut output = format!("Index: {}", index.name);
        for topic in &index.topics {
            output.push_str(&format!("\n  {}", topic));
        }
        Ok(output)
    }
}
