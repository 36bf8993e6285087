//! # lombok-support-cli
//!
//! Command-line surface over the lombok-support libraries: locate a
//! version declaration in a build file, inspect classpath entries for the
//! Lombok artifact, and rewrite launch parameter lists with the agent
//! flag.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{
    InspectArgs, LocateArgs, ParamsArgs, handle_inspect, handle_locate, handle_params,
};

pub mod commands;
pub mod hosts;

#[derive(Parser, Debug)]
#[command(
    name = "lombok-support",
    author,
    version,
    about = "Lombok detection and launch wiring for Java language servers",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Locate(LocateArgs),
    Inspect(InspectArgs),
    Params(ParamsArgs),
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// # Errors
/// Returns error if the invoked command fails.
pub async fn main(args: &[String]) -> Result<()> {
    init_tracing();
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Locate(args) => handle_locate(&args).await?,
        Commands::Inspect(args) => handle_inspect(&args).await?,
        Commands::Params(args) => handle_params(&args).await?,
    }
    Ok(())
}
