use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lombok_support_core::SupportConfig;
use lombok_support_engine::LombokSupport;

use crate::hosts::{StaticProjectHost, gather_entries};

#[derive(Args, Debug)]
#[command(about = "Rewrite launch parameters with the Lombok agent flag")]
pub struct ParamsArgs {
    /// Classpath entry of the synthetic project (repeatable)
    #[arg(short, long = "entry")]
    pub entries: Vec<String>,

    /// File with one classpath entry per line
    #[arg(short, long)]
    pub classpath_file: Option<PathBuf>,

    /// Support configuration file; defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Launch parameters to rewrite, printed one per line afterwards
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,
}

/// Reconcile the given entries as one project, inject the agent flag,
/// and print the resulting parameter list.
///
/// # Errors
/// Returns error if the classpath or config file cannot be read.
pub async fn handle_params(args: &ParamsArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SupportConfig::load(path).await?,
        None => SupportConfig::default(),
    };
    let entries = gather_entries(&args.entries, args.classpath_file.as_deref()).await?;
    let host = StaticProjectHost::new(entries);

    let mut support = LombokSupport::in_memory(config);
    let outcome = support.reconcile(&host).await?;
    eprintln!("{outcome}");

    let mut params = args.params.clone();
    support.inject_agent_param(&mut params);
    for param in &params {
        println!("{param}");
    }
    Ok(())
}
