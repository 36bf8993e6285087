use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use lombok_support_core::{is_lombok_jar, version_token};

use crate::hosts::gather_entries;

#[derive(Args, Debug)]
#[command(about = "Find the Lombok artifact among classpath entries")]
pub struct InspectArgs {
    /// Classpath entries to scan, in order
    pub entries: Vec<String>,

    /// File with one classpath entry per line, appended after the
    /// positional entries
    #[arg(short, long)]
    pub classpath_file: Option<PathBuf>,
}

/// Print the first Lombok entry and its version token.
///
/// # Errors
/// Returns error if no entry matches or the classpath file cannot be
/// read.
pub async fn handle_inspect(args: &InspectArgs) -> Result<()> {
    let entries = gather_entries(&args.entries, args.classpath_file.as_deref()).await?;
    let entry = entries
        .iter()
        .find(|entry| is_lombok_jar(entry))
        .context("No Lombok entry on the given classpath")?;
    let token = version_token(entry)?;
    println!("{} {}", entry.bold(), format!("({token})").green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_inspect_finds_first_match() {
        let args = InspectArgs {
            entries: vec![
                "/libs/junit-4.13.jar".to_string(),
                "/libs/lombok-1.18.20.jar".to_string(),
                "/libs/lombok-9.9.9.jar".to_string(),
            ],
            classpath_file: None,
        };
        handle_inspect(&args).await.unwrap();
    }

    #[tokio::test]
    async fn test_handle_inspect_no_match() {
        let args = InspectArgs {
            entries: vec!["/libs/junit-4.13.jar".to_string()],
            classpath_file: None,
        };
        let result = handle_inspect(&args).await;
        assert!(result.is_err());
    }
}
