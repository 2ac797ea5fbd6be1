//! CLI module for hotlist
//!
//! Provides command-line interface for the trending aggregation server.

pub mod check;
pub mod fetch;
pub mod reset;
pub mod serve;

use clap::{Parser, Subcommand};

/// hotlist - Trending-list aggregation server with mirror failover
#[derive(Parser, Debug)]
#[command(name = "hotlist")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    HOTLIST_HOST               Bind address (default: 0.0.0.0)
    HOTLIST_PORT               Listen port (default: 9060)
    HOTLIST_LOG_LEVEL          Log level (default: info)
    HOTLIST_LOG_DIR            Directory for daily-rolling log files
    HOTLIST_INSTANCES          Comma-separated upstream mirror base URLs
    HOTLIST_PROBE_TIMEOUT_MS   Probe timeout in milliseconds (default: 5000)
    HOTLIST_SELECTION_FILE     Path of the persisted-selection file
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the aggregation server
    Serve(serve::ServeArgs),
    /// Probe all configured mirror instances once and print the results
    Check(check::CheckArgs),
    /// Fetch one platform's trending list and print it
    Fetch(fetch::FetchArgs),
    /// Clear the persisted instance selection
    Reset(reset::ResetArgs),
}
