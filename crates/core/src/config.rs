use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

/// File name the configuration is read from when the host keeps it on disk.
pub const CONFIG_FILE_NAME: &str = "lombok-support.json";

/// Controls whether Lombok support is active for the session.
///
/// Disabled support turns dependency checks and agent injection into
/// no-ops; the scanner stays usable either way.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl SupportConfig {
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .await
            .context(format!("Failed to read config - {}", path.display()))?;
        serde_json::from_str(&content)
            .context(format!("Failed to parse config - {}", path.display()))
    }
}
