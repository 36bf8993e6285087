use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::fs::read_to_string;

use lombok_support_buildfile::{BuildTool, locate_version_offset};

#[derive(Args, Debug)]
#[command(about = "Locate the Lombok version declaration in a build file")]
pub struct LocateArgs {
    /// Build file to scan (pom.xml or a Gradle script)
    pub build_file: PathBuf,
}

/// Print the position of the Lombok version declaration.
///
/// # Errors
/// Returns error if the file is not a recognized build file, cannot be
/// read, or contains no declaration.
pub async fn handle_locate(args: &LocateArgs) -> Result<()> {
    let tool = BuildTool::from_path(&args.build_file).context(format!(
        "Not a recognized build file - {}",
        args.build_file.display()
    ))?;
    let text = read_to_string(&args.build_file).await.context(format!(
        "Failed to read build file - {}",
        args.build_file.display()
    ))?;

    let offset = locate_version_offset(&text, tool).context(format!(
        "No Lombok version declaration found in {}",
        args.build_file.display()
    ))?;
    let (line, column) = line_col(&text, offset);
    println!(
        "{}:{}:{} {}",
        format!("{}", args.build_file.display()).bold(),
        line,
        column,
        format!("(byte offset {offset})").dimmed()
    );
    Ok(())
}

/// 1-based line and column of a byte offset.
fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("abc", 0, (1, 1))]
    #[case("abc", 2, (1, 3))]
    #[case("a\nbc", 2, (2, 1))]
    #[case("a\nb\nc", 4, (3, 1))]
    fn test_line_col(#[case] text: &str, #[case] offset: usize, #[case] expected: (usize, usize)) {
        assert_eq!(line_col(text, offset), expected);
    }

    #[tokio::test]
    async fn test_handle_locate_maven() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        fs::write(
            &pom,
            "<project><dependency>\
             <artifactId>lombok</artifactId><version>1.18.20</version>\
             </dependency></project>",
        )
        .unwrap();

        let args = LocateArgs { build_file: pom };
        handle_locate(&args).await.unwrap();

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_handle_locate_unrecognized_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Makefile");
        fs::write(&file, "all:\n").unwrap();

        let args = LocateArgs { build_file: file };
        let result = handle_locate(&args).await;
        assert!(result.is_err());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_handle_locate_no_declaration() {
        let temp_dir = TempDir::new().unwrap();
        let gradle = temp_dir.path().join("build.gradle");
        fs::write(&gradle, "// org.projectlombok:lombok:1.18.20\n").unwrap();

        let args = LocateArgs { build_file: gradle };
        let result = handle_locate(&args).await;
        assert!(result.is_err());

        temp_dir.close().unwrap();
    }
}
