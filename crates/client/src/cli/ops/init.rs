use clap::Args;
use url::Url;

use pict_client::state::{AppConfig, AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Image server URL to configure (default: http://localhost:2342)
    #[arg(long)]
    pub server_url: Option<Url>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = self
            .server_url
            .clone()
            .map(|server_url| AppConfig { server_url });

        let state = AppState::init(ctx.config_path.clone(), config)?;
        let identifier = state.load_key()?.public().identifier();

        let output = format!(
            "Initialized pict directory at: {}\n\
             - Key: {}\n\
             - Config: {}\n\
             - Server: {}\n\
             - Identifier: {}",
            state.pict_dir.display(),
            state.key_path.display(),
            state.config_path.display(),
            state.config.server_url,
            identifier
        );

        Ok(output)
    }
}
