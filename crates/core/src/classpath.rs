use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// A classpath entry counts as the Lombok artifact when it carries a
/// `lombok-<version>.jar` file name anywhere in its path.
static LOMBOK_JAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lombok-.*\.jar").expect("hardcoded regex must compile"));

static VERSION_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lombok-(.*)\.jar").expect("hardcoded regex must compile"));

/// Matches agent jar paths regardless of how they were declared, so stale
/// or user-supplied `-javaagent` flags can be filtered out before a fresh
/// one is appended.
pub static AGENT_JAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]lombok.*\.jar").expect("hardcoded regex must compile"));

/// Error type for classpath entries that carry no extractable version token.
#[derive(Debug, Error)]
#[error("no lombok version token in classpath entry: {entry}")]
pub struct VersionPatternError {
    pub entry: String,
}

#[must_use]
pub fn is_lombok_jar(entry: &str) -> bool {
    LOMBOK_JAR_PATTERN.is_match(entry)
}

/// Extract the version token from a classpath entry.
///
/// The token is the opaque run of characters between `lombok-` and `.jar`
/// ("1.18.20" for `/libs/lombok-1.18.20.jar`). Tokens are compared for
/// textual equality only, never ordered.
///
/// # Errors
/// Returns [`VersionPatternError`] if the entry does not contain a
/// `lombok-*.jar` component.
pub fn version_token(entry: &str) -> Result<String, VersionPatternError> {
    VERSION_TOKEN_PATTERN
        .captures(entry)
        .and_then(|caps| caps.get(1))
        .map(|token| token.as_str().to_string())
        .ok_or_else(|| VersionPatternError {
            entry: entry.to_string(),
        })
}

/// Display form of a resolved entry, `.jar` suffix stripped ("lombok-1.18.20").
///
/// # Errors
/// Returns [`VersionPatternError`] if the entry does not contain a
/// `lombok-*.jar` component.
pub fn version_label(entry: &str) -> Result<String, VersionPatternError> {
    Ok(format!("lombok-{}", version_token(entry)?))
}
