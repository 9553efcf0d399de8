use clap::{Args, Subcommand};

pub mod add;
pub mod list;
pub mod remove;

use crate::cli::op::Op;

crate::command_enum! {
    (List, list::List),
    (Add, add::Add),
    (Remove, remove::Remove),
}

// Rename the generated Command to TagCommand for clarity
pub type TagCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Tag {
    #[command(subcommand)]
    pub command: TagCommand,
}

#[async_trait::async_trait]
impl Op for Tag {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
