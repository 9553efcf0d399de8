use clap::{Args, Subcommand};

pub mod create;
pub mod list;
pub mod show;

use crate::cli::op::Op;

crate::command_enum! {
    (List, list::List),
    (Show, show::Show),
    (Create, create::Create),
}

// Rename the generated Command to IndexCommand for clarity
pub type IndexCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Index {
    #[command(subcommand)]
    pub command: IndexCommand,
}

#[async_trait::async_trait]
impl Op for Index {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
