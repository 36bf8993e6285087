use std::path::Path;

const MAVEN_BUILD_FILES: [&str; 1] = ["pom.xml"];
const GRADLE_BUILD_FILES: [&str; 4] = [
    "build.gradle",
    "build.gradle.kts",
    "settings.gradle",
    "settings.gradle.kts",
];

/// Project build flavor, decided by the build-description file's basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    /// Recognize a build file by its basename. Any other file name is not
    /// a build-description file this module knows how to scan.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        if MAVEN_BUILD_FILES.contains(&file_name) {
            Some(Self::Maven)
        } else if GRADLE_BUILD_FILES.contains(&file_name) {
            Some(Self::Gradle)
        } else {
            None
        }
    }
}
