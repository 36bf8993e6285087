use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Group identifier Lombok is declared under in Gradle scripts.
pub const LOMBOK_GROUP_ID: &str = "org.projectlombok";

const COMMENT_FILLER: &str = "@";

static COMMENT_REGIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//[^\n]*|/\*[\s\S]*?\*/").expect("hardcoded regex must compile")
});

/// Byte offset of the first Lombok group-id occurrence outside comments.
///
/// Comment regions are overwritten with a filler of identical byte length
/// first, so every surviving offset still points into the original text.
#[must_use]
pub fn locate_group_offset(text: &str) -> Option<usize> {
    let neutralized = COMMENT_REGIONS.replace_all(text, |caps: &Captures<'_>| {
        COMMENT_FILLER.repeat(caps[0].len())
    });
    neutralized.find(LOMBOK_GROUP_ID)
}
