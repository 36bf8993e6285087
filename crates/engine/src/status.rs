use std::path::Path;

use anyhow::Result;

use lombok_support_core::{StatusCommand, VersionStatusDisplay};

const CHANGE_VERSION_TITLE: &str = "Change Version";

/// Click action for the status item: open the build file that declares
/// the Lombok version.
#[must_use]
pub fn change_version_command(build_file: &Path) -> StatusCommand {
    StatusCommand {
        title: CHANGE_VERSION_TITLE.to_string(),
        build_file: build_file.to_path_buf(),
        tooltip: format!("Open {}", build_file.display()),
    }
}

/// Publish the current version label through the host's status item.
///
/// Returns false without touching the host when the status capability is
/// not supported.
///
/// # Errors
/// Returns error if the host fails to render the item.
pub fn update_version_item(
    display: &mut dyn VersionStatusDisplay,
    text: &str,
    build_file: Option<&Path>,
) -> Result<bool> {
    if !display.supports_version_item() {
        return Ok(false);
    }
    let command = build_file.map(change_version_command);
    display.show_version(text, command.as_ref())?;
    Ok(true)
}
