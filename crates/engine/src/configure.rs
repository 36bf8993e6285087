use std::path::Path;

use anyhow::Result;
use tracing::debug;

use lombok_support_buildfile::{BuildTool, locate_version_offset};
use lombok_support_core::Navigator;

/// Jump the user's cursor to the Lombok version declaration in a build
/// file.
///
/// Returns the offset navigated to, or `None` when the file is not a
/// recognized build file or no declaration was found; both are quiet
/// no-ops, not errors.
///
/// # Errors
/// Returns error if reading the document or moving the cursor fails.
pub async fn goto_version_declaration(
    navigator: &dyn Navigator,
    build_file: &Path,
) -> Result<Option<usize>> {
    let Some(tool) = BuildTool::from_path(build_file) else {
        return Ok(None);
    };
    let text = navigator.read_document(build_file).await?;
    match locate_version_offset(&text, tool) {
        Some(offset) => {
            debug!(build_file = %build_file.display(), offset, "revealing lombok declaration");
            navigator.goto_offset(build_file, offset).await?;
            Ok(Some(offset))
        }
        None => Ok(None),
    }
}
