use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// endpoint-list: inspect and manage the RPC endpoint dropdown.
#[derive(Parser, Debug)]
#[command(name = "endpoint-list", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// JSON file used as persistent key-value storage
    #[arg(long, default_value = "endpoints.json", global = true)]
    pub storage: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the endpoint dropdown options
    List(ListArgs),

    /// Save a custom endpoint
    Add(EndpointArgs),

    /// Forget a saved custom endpoint
    Remove(EndpointArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output as JSON lines instead of TSV
    #[arg(long)]
    pub json: bool,

    /// Translation catalog (JSON: namespace -> key -> text)
    #[arg(long)]
    pub locale: Option<PathBuf>,

    /// Custom environment endpoint; the WS_URL variable takes precedence
    #[arg(long)]
    pub ws_url: Option<String>,

    /// Skip section headers
    #[arg(long)]
    pub selectable: bool,
}

/// Arguments for the `add` and `remove` subcommands.
#[derive(Parser, Debug)]
pub struct EndpointArgs {
    /// Websocket address (e.g. wss://rpc.example.com)
    pub url: String,
}
