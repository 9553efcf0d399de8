pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "pict")]
#[command(about = "Client for an identity-scoped image topic server")]
pub struct Args {
    /// Server URL (overrides the configured server)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the pict config directory (defaults to ~/.pict)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
