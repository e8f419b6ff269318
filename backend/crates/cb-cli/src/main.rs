//! cb - callback relay CLI
//!
//! # Examples
//!
//! ```bash
//! # Broadcast a log line to every open stream
//! cb send --message "deploy finished" --level info --service ci
//!
//! # Kick off an external function that reports back to the relay
//! cb trigger --function-url https://example.com/run --project-id p1 --target main
//!
//! # Read the polling history
//! cb history list --pretty
//! ```

mod cli;
mod commands;
mod history_commands;

use crate::{cli::Cli, commands::Commands, history_commands::HistoryCommands};

use cb_cli::{CliClientResult, Client, ClientError};

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Map, Value};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(&server_url);
    let pretty = cli.pretty;

    let result = match cli.command {
        Commands::Send {
            message,
            level,
            service,
            json,
            history,
        } => match build_event(message, level, service, json) {
            Ok(event) => client.send_event(&event, history).await,
            Err(e) => Err(e),
        },

        Commands::Save { output } => client.save_output(&output).await,

        Commands::Watch => {
            client
                .watch(|event| print_json(&event, pretty))
                .await
                .map(|()| Value::Null)
        }

        Commands::Trigger {
            function_url,
            project_id,
            target,
            callback_url,
        } => {
            client
                .trigger(&function_url, &project_id, &target, callback_url.as_deref())
                .await
        }

        Commands::History { action } => match action {
            HistoryCommands::List => client.list_history().await,
            HistoryCommands::Clear => client.clear_history().await,
        },

        Commands::Health => client.health().await,
    };

    match result {
        Ok(Value::Null) => ExitCode::SUCCESS,
        Ok(json) => {
            print_json(&json, pretty);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json(value: &Value, pretty: bool) {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing response: {}", e),
    }
}

/// Assemble the event body from flags, or parse `--json` verbatim
fn build_event(
    message: Option<String>,
    level: Option<String>,
    service: Option<String>,
    json: Option<String>,
) -> CliClientResult<Value> {
    if let Some(raw) = json {
        return Ok(serde_json::from_str(&raw)?);
    }

    let mut event = Map::new();
    for (key, value) in [("message", message), ("level", level), ("service", service)] {
        if let Some(value) = value {
            event.insert(key.to_string(), Value::String(value));
        }
    }

    if event.is_empty() {
        return Err(ClientError::validation(
            "Provide --message, --level, --service or --json",
        ));
    }

    Ok(Value::Object(event))
}

/// Build the server URL from the relay's own config (CB_CONFIG_DIR or ./.cb/)
fn discover_server_url() -> String {
    match cb_config::Config::load() {
        Ok(config) => {
            let host = match config.server.host.as_str() {
                "0.0.0.0" | "::" => "127.0.0.1",
                host => host,
            };
            format!("http://{}:{}", host, config.server.port)
        }
        Err(e) => {
            eprintln!("Error reading relay config: {}", e);
            eprintln!();
            eprintln!("Specify a server URL explicitly:");
            eprintln!("  cb --server http://127.0.0.1:3000 <command>");
            std::process::exit(1);
        }
    }
}
