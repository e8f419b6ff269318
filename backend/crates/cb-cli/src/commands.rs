use crate::history_commands::HistoryCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Send one event to the relay
    Send {
        /// Event message
        #[arg(long)]
        message: Option<String>,
        /// Log level (info, warn, error, ...)
        #[arg(long)]
        level: Option<String>,
        /// Name of the sending service
        #[arg(long)]
        service: Option<String>,
        /// Raw JSON body; overrides the other fields
        #[arg(long, conflicts_with_all = ["message", "level", "service"])]
        json: Option<String>,
        /// Record in the polling history instead of broadcasting live
        #[arg(long)]
        history: bool,
    },

    /// Persist one text payload
    Save {
        /// Text to store
        output: String,
    },

    /// Print live events until the server closes the stream
    Watch,

    /// POST a job to an external function URL and print its answer
    Trigger {
        #[arg(long)]
        function_url: String,
        #[arg(long)]
        project_id: String,
        #[arg(long)]
        target: String,
        /// Where the function should report back (defaults to <server>/api/callback)
        #[arg(long)]
        callback_url: Option<String>,
    },

    /// Polling history operations
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },

    /// Server health
    Health,
}
