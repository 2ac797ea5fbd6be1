//! hotlist Server Entry Point

use clap::Parser;
use hotlist::cli::{Cli, Commands};
use hotlist::config::{env_or, env_parse, UpstreamConfig};
use hotlist::{logging, server, AppState};
use tracing::info;

#[derive(Clone)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = env_or("HOTLIST_HOST", "0.0.0.0");
        let port = env_parse("HOTLIST_PORT", 9060);
        Self { host, port }
    }

    fn from_args(host: String, port: u16) -> Self {
        Self { host, port }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    match cli.command {
        Some(Commands::Check(args)) => {
            if let Err(e) = hotlist::cli::check::execute(&args).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Fetch(args)) => {
            if let Err(e) = hotlist::cli::fetch::execute(&args).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Reset(args)) => {
            if let Err(e) = hotlist::cli::reset::execute(&args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Serve(args)) => {
            run_server(ServerConfig::from_args(args.host, args.port)).await;
        }
        None => {
            run_server(ServerConfig::from_env()).await;
        }
    }
}

async fn run_server(config: ServerConfig) {
    let upstream = UpstreamConfig::from_env();
    info!(
        instances = upstream.instances.len(),
        selection_file = %upstream.selection_file.display(),
        "Starting hotlist server"
    );

    let state = AppState::new(&upstream);
    server::run(state, &config.bind_addr()).await;
}
