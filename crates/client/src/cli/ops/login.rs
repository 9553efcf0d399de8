use clap::Args;

use pict_client::api::{AuthError, Authenticator};
use pict_client::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Login;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("state error: {0}")]
    State(#[from] StateError),
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Login {
    type Error = LoginError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;
        let key = state.load_key()?;

        let mut authenticator = Authenticator::new(&ctx.client);
        let session = authenticator.authenticate(&key).await?;

        Ok(format!("Authenticated as {}", session.identifier()))
    }
}
