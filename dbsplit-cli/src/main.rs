//! dbsplit CLI - read/write split demo service
//!
//! `dbsplit serve` runs the HTTP API with writes on the primary database
//! and reads on the replica. `dbsplit config` prints the resolved
//! datasource URLs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "dbsplit",
    author,
    version,
    about = "HTTP demo service splitting writes to a primary database and reads to a replica"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Load variables from this file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Print resolved datasource URLs (passwords masked)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    match &cli.env_file {
        Some(path) => dbsplit_server::config::load_dotenv_from(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?,
        None => {
            dbsplit_server::config::load_dotenv();
        }
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Config(args) => commands::config::run_config(args),
    };

    tracing_setup::shutdown_otel();
    result
}
