use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cb")]
#[command(about = "Callback relay CLI: send events, trigger functions, read history")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the host and port in the relay's config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
