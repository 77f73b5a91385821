//! Print the resolved datasource configuration
//!
//! Shows what `serve` would connect to, with passwords masked.

use anyhow::Result;
use clap::Parser;

use dbsplit_server::config::redact_password;
use dbsplit_server::Target;

use super::serve::DatasourceArgs;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub datasources: DatasourceArgs,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    let database = args.datasources.resolve();
    for target in [Target::Primary, Target::Replica] {
        println!("{:<8} {}", target, redact_password(database.url(target)));
    }
    Ok(())
}
