use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::read_to_string;

use lombok_support_core::{ClasspathScope, ProjectHost};

const SYNTHETIC_PROJECT_URI: &str = "cli://workspace";

/// Project host over a fixed entry list: one synthetic project whose
/// runtime classpath is exactly the entries handed to the CLI.
#[derive(Debug)]
pub struct StaticProjectHost {
    entries: Vec<String>,
}

impl StaticProjectHost {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ProjectHost for StaticProjectHost {
    async fn java_projects(&self) -> Result<Vec<String>> {
        Ok(vec![SYNTHETIC_PROJECT_URI.to_string()])
    }

    async fn classpath(&self, _project_uri: &str, scope: ClasspathScope) -> Result<Vec<String>> {
        Ok(match scope {
            ClasspathScope::Runtime => self.entries.clone(),
            ClasspathScope::Test => Vec::new(),
        })
    }
}

/// Collect classpath entries from positional arguments plus an optional
/// one-entry-per-line file, in that order.
///
/// # Errors
/// Returns error if the classpath file cannot be read.
pub async fn gather_entries(
    positional: &[String],
    classpath_file: Option<&Path>,
) -> Result<Vec<String>> {
    let mut entries = positional.to_vec();
    if let Some(path) = classpath_file {
        let content = read_to_string(path)
            .await
            .context(format!("Failed to read classpath file - {}", path.display()))?;
        entries.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string),
        );
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_static_host_serves_runtime_scope() {
        let host = StaticProjectHost::new(vec!["/libs/lombok-1.18.20.jar".to_string()]);
        let projects = host.java_projects().await.unwrap();
        assert_eq!(projects.len(), 1);

        let runtime = host
            .classpath(&projects[0], ClasspathScope::Runtime)
            .await
            .unwrap();
        assert_eq!(runtime, vec!["/libs/lombok-1.18.20.jar".to_string()]);

        let test = host
            .classpath(&projects[0], ClasspathScope::Test)
            .await
            .unwrap();
        assert!(test.is_empty());
    }

    #[tokio::test]
    async fn test_gather_entries_from_args_only() {
        let entries = gather_entries(&["/libs/a.jar".to_string()], None).await.unwrap();
        assert_eq!(entries, vec!["/libs/a.jar".to_string()]);
    }

    #[tokio::test]
    async fn test_gather_entries_appends_file_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("classpath.txt");
        fs::write(&file, "/libs/b.jar\n\n  /libs/c.jar  \n").unwrap();

        let entries = gather_entries(&["/libs/a.jar".to_string()], Some(&file))
            .await
            .unwrap();
        assert_eq!(
            entries,
            vec![
                "/libs/a.jar".to_string(),
                "/libs/b.jar".to_string(),
                "/libs/c.jar".to_string(),
            ]
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_gather_entries_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("absent.txt");
        let result = gather_entries(&[], Some(&file)).await;
        assert!(result.is_err());
        temp_dir.close().unwrap();
    }
}
