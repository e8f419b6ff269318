use clap::Subcommand;

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List buffered callbacks, newest first
    List,
    /// Drop every buffered callback
    Clear,
}
