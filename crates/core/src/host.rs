use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

/// Classpath scope flag passed through to the host's classpath query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClasspathScope {
    Runtime,
    Test,
}

impl ClasspathScope {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Test => "test",
        }
    }
}

/// Project enumeration and classpath lookup against the backing build
/// environment.
///
/// Both lists are ordered as the host supplies them; the reconciliation
/// engine depends on that order for its first-match-wins guarantee and
/// awaits each classpath fetch before issuing the next.
#[async_trait]
pub trait ProjectHost: std::fmt::Debug + Send + Sync {
    /// # Errors
    /// Returns error if the host cannot enumerate projects.
    async fn java_projects(&self) -> Result<Vec<String>>;

    /// # Errors
    /// Returns error if the classpath query fails for the project.
    async fn classpath(&self, project_uri: &str, scope: ClasspathScope) -> Result<Vec<String>>;
}

/// User-facing confirmation with a single actionable choice.
#[async_trait]
pub trait RestartPrompt: Send + Sync {
    /// Resolves to true when the user picks the action, false when the
    /// prompt is dismissed.
    ///
    /// # Errors
    /// Returns error if the host fails to display the prompt.
    async fn confirm(&self, message: &str, action: &str) -> Result<bool>;
}

/// Opaque restart command for the backing language-analysis process.
#[async_trait]
pub trait LanguageServerControl: Send + Sync {
    /// # Errors
    /// Returns error if the host rejects the restart command.
    async fn restart(&self) -> Result<()>;
}

/// Document access and cursor movement.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// # Errors
    /// Returns error if the document cannot be opened or read.
    async fn read_document(&self, path: &Path) -> Result<String>;

    /// Move the selection to a byte offset in the document and reveal it.
    ///
    /// # Errors
    /// Returns error if the host rejects the navigation.
    async fn goto_offset(&self, path: &Path, offset: usize) -> Result<()>;
}

/// Click action attached to the version status item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCommand {
    pub title: String,
    pub build_file: PathBuf,
    pub tooltip: String,
}

/// Small UI element showing the current Lombok version. Optional host
/// capability; callers must check support before updating it.
pub trait VersionStatusDisplay: Send + Sync {
    fn supports_version_item(&self) -> bool;

    /// # Errors
    /// Returns error if the host fails to render the item.
    fn show_version(&mut self, text: &str, command: Option<&StatusCommand>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ClasspathScope::Runtime, "runtime")]
    #[case(ClasspathScope::Test, "test")]
    fn test_classpath_scope_as_str(#[case] scope: ClasspathScope, #[case] expected: &str) {
        assert_eq!(scope.as_str(), expected);
    }
}
