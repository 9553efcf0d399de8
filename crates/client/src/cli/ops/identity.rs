use clap::Args;

use pict_client::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Identity;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("state error: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Identity {
    type Error = IdentityError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;
        let public_key = state.load_key()?.public();

        Ok(format!(
            "Public key: {}\nIdentifier: {}",
            public_key.to_base64(),
            public_key.identifier()
        ))
    }
}
