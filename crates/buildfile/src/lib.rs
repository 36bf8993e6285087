//! # lombok-support-buildfile
//!
//! Locates the Lombok version declaration inside Maven and Gradle build
//! files without a full build-language parser. The Maven scanner walks the
//! markup as a flat event stream and keeps a working list per dependency
//! block; the Gradle scanner blanks out comment regions and searches for
//! the Lombok group id. Offsets are byte offsets into the scanned text.

pub mod build_tool;
pub mod gradle;
pub mod maven;

pub use build_tool::BuildTool;

/// Byte offset of the Lombok version declaration in `text`, or `None`.
///
/// `None` is the normal not-found outcome, never an error: unparseable
/// content simply yields no location.
#[must_use]
pub fn locate_version_offset(text: &str, tool: BuildTool) -> Option<usize> {
    match tool {
        BuildTool::Maven => maven::locate_version_offset(text),
        BuildTool::Gradle => gradle::locate_group_offset(text),
    }
}
