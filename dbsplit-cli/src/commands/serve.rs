//! HTTP server command
//!
//! Resolves both datasource URLs, builds the pools and runs the server
//! until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use dbsplit_server::{run_server, DatabaseConfig, Datasources, PoolSettings, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to [default: $BIND_ADDR or 127.0.0.1:8000]
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    #[command(flatten)]
    pub datasources: DatasourceArgs,

    /// Maximum connections per pool
    #[arg(
        long,
        default_value_t = PoolSettings::default().max_connections,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request
    #[arg(
        long,
        default_value_t = PoolSettings::default().acquire_timeout.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub acquire_timeout_secs: u64,
}

/// Explicit datasource overrides, winning over DB_* variables
#[derive(clap::Args, Debug, Default)]
pub struct DatasourceArgs {
    /// Primary (write) database URL
    #[arg(long)]
    pub primary_url: Option<String>,

    /// Replica (read) database URL
    #[arg(long)]
    pub replica_url: Option<String>,
}

impl DatasourceArgs {
    /// Environment resolution with CLI overrides applied.
    pub fn resolve(&self) -> DatabaseConfig {
        DatabaseConfig::from_env().with_overrides(self.primary_url.clone(), self.replica_url.clone())
    }
}

fn bind_addr(arg: Option<SocketAddr>) -> Result<SocketAddr> {
    if let Some(addr) = arg {
        return Ok(addr);
    }
    match std::env::var("BIND_ADDR") {
        Ok(raw) if !raw.is_empty() => raw
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR '{}'", raw)),
        _ => Ok(ServerConfig::default().bind_addr),
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database = args.datasources.resolve();
    let settings = PoolSettings {
        max_connections: args.max_connections,
        acquire_timeout: Duration::from_secs(args.acquire_timeout_secs),
        ..PoolSettings::default()
    };

    let datasources = Datasources::connect_lazy(&database, &settings)
        .context("Failed to configure database pools")?;

    let config = ServerConfig {
        bind_addr: bind_addr(args.bind)?,
    };
    tracing::info!("Starting dbsplit server on {}", config.bind_addr);

    run_server(datasources, config).await.context("Server error")?;

    Ok(())
}
