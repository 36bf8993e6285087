use quick_xml::Reader;
use quick_xml::events::Event;

const DEPENDENCY_TAG: &str = "dependency";
const ARTIFACT_ID_TAG: &str = "artifactid";
const VERSION_TAG: &str = "version";
const LOMBOK_ARTIFACT_ID: &str = "lombok";

/// Byte offset of the version text inside the first dependency block that
/// declares the Lombok artifact together with an explicit version.
///
/// The markup is consumed as a flat event stream: a working list of
/// (name-or-text, offset) pairs starts collecting at a `dependency` open
/// tag and is evaluated and cleared at every `dependency` close tag,
/// whatever the nesting depth in between. Tag names are ASCII-lowercased
/// before comparison; text nodes are compared verbatim.
#[must_use]
pub fn locate_version_offset(text: &str) -> Option<usize> {
    let mut reader = Reader::from_str(text);
    let mut pending: Vec<(String, usize)> = Vec::new();

    loop {
        let at = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = tag_name(e.local_name().as_ref());
                if name == DEPENDENCY_TAG || !pending.is_empty() {
                    pending.push((name, at));
                }
            }
            Ok(Event::Empty(e)) => {
                // presents as open followed by close
                let name = tag_name(e.local_name().as_ref());
                let closes_block = name == DEPENDENCY_TAG;
                if closes_block || !pending.is_empty() {
                    pending.push((name, at));
                }
                if closes_block {
                    if let Some(offset) = lombok_version_offset(&pending) {
                        return Some(offset);
                    }
                    pending.clear();
                }
            }
            Ok(Event::Text(e)) => {
                if !pending.is_empty() {
                    let content = String::from_utf8_lossy(&e).into_owned();
                    pending.push((content, at));
                }
            }
            Ok(Event::End(e)) => {
                if tag_name(e.local_name().as_ref()) == DEPENDENCY_TAG {
                    pending.push((DEPENDENCY_TAG.to_string(), at));
                    if let Some(offset) = lombok_version_offset(&pending) {
                        return Some(offset);
                    }
                    pending.clear();
                }
            }
            // unparseable markup past this point cannot produce a match
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

/// Evaluate one collected dependency block. The block qualifies when an
/// `artifactid` entry is immediately followed by the `lombok` text and a
/// `version` entry exists; the offset of the entry after the last
/// `version` entry wins.
fn lombok_version_offset(entries: &[(String, usize)]) -> Option<usize> {
    let mut has_lombok = false;
    let mut version_offset = None;
    for pair in entries.windows(2) {
        if pair[0].0 == ARTIFACT_ID_TAG && pair[1].0 == LOMBOK_ARTIFACT_ID {
            has_lombok = true;
        }
        if pair[0].0 == VERSION_TAG {
            version_offset = Some(pair[1].1);
        }
    }
    if has_lombok { version_offset } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOMBOK_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <dependencies>
    <dependency>
      <groupId>org.projectlombok</groupId>
      <artifactId>lombok</artifactId>
      <version>1.18.20</version>
      <scope>provided</scope>
    </dependency>
  </dependencies>
</project>
"#;

    #[test]
    fn test_locates_version_text_offset() {
        let offset = locate_version_offset(LOMBOK_POM).unwrap();
        assert_eq!(&LOMBOK_POM[offset..offset + 7], "1.18.20");
        assert_eq!(offset, LOMBOK_POM.find("1.18.20").unwrap());
    }

    #[test]
    fn test_version_declared_before_artifact_id() {
        let text = "<project><dependencies><dependency>\
                    <version>1.18.24</version>\
                    <artifactId>lombok</artifactId>\
                    </dependency></dependencies></project>";
        let offset = locate_version_offset(text).unwrap();
        assert_eq!(&text[offset..offset + 7], "1.18.24");
    }

    #[test]
    fn test_other_artifact_is_not_matched() {
        let text = "<project><dependencies><dependency>\
                    <artifactId>junit</artifactId><version>4.13.2</version>\
                    </dependency></dependencies></project>";
        assert_eq!(locate_version_offset(text), None);
    }

    #[test]
    fn test_lombok_without_version_is_not_matched() {
        let text = "<project><dependencies><dependency>\
                    <artifactId>lombok</artifactId><scope>provided</scope>\
                    </dependency></dependencies></project>";
        assert_eq!(locate_version_offset(text), None);
    }

    #[test]
    fn test_first_qualifying_block_wins() {
        let text = "<project><dependencies>\
                    <dependency><artifactId>junit</artifactId><version>4.13.2</version></dependency>\
                    <dependency><artifactId>lombok</artifactId><version>1.18.20</version></dependency>\
                    <dependency><artifactId>lombok</artifactId><version>9.9.9</version></dependency>\
                    </dependencies></project>";
        let offset = locate_version_offset(text).unwrap();
        assert_eq!(&text[offset..offset + 7], "1.18.20");
    }

    #[test]
    fn test_version_from_neighbouring_block_does_not_leak() {
        // the working list resets at each dependency close, so the junit
        // block's version cannot satisfy the lombok block
        let text = "<project><dependencies>\
                    <dependency><artifactId>junit</artifactId><version>4.13.2</version></dependency>\
                    <dependency><artifactId>lombok</artifactId></dependency>\
                    </dependencies></project>";
        assert_eq!(locate_version_offset(text), None);
    }

    #[test]
    fn test_tag_names_are_case_folded() {
        let text = "<project><DEPENDENCY>\
                    <ArtifactId>lombok</ArtifactId><VERSION>1.18.20</VERSION>\
                    </DEPENDENCY></project>";
        let offset = locate_version_offset(text).unwrap();
        assert_eq!(&text[offset..offset + 7], "1.18.20");
    }

    #[test]
    fn test_artifact_text_is_compared_verbatim() {
        let text = "<project><dependency>\
                    <artifactId>Lombok</artifactId><version>1.18.20</version>\
                    </dependency></project>";
        assert_eq!(locate_version_offset(text), None);
    }

    #[test]
    fn test_padded_artifact_text_is_not_matched() {
        let text = "<project><dependency>\
                    <artifactId> lombok </artifactId><version>1.18.20</version>\
                    </dependency></project>";
        assert_eq!(locate_version_offset(text), None);
    }

    #[test]
    fn test_nested_exclusions_accumulate_into_the_block() {
        // nested non-dependency tags join the same working list; the block
        // still qualifies through its own artifactId and version
        let text = "<project><dependency>\
                    <artifactId>lombok</artifactId>\
                    <exclusions><exclusion><artifactId>shade</artifactId></exclusion></exclusions>\
                    <version>1.18.20</version>\
                    </dependency></project>";
        let offset = locate_version_offset(text).unwrap();
        assert_eq!(&text[offset..offset + 7], "1.18.20");
    }

    #[test]
    fn test_last_version_entry_in_a_block_wins() {
        let text = "<project><dependency>\
                    <artifactId>lombok</artifactId>\
                    <version>1.18.20</version>\
                    <version>1.18.24</version>\
                    </dependency></project>";
        let offset = locate_version_offset(text).unwrap();
        assert_eq!(&text[offset..offset + 7], "1.18.24");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(locate_version_offset(""), None);
    }

    #[test]
    fn test_malformed_markup_yields_not_found() {
        let text = "<project><dependency><artifactId>lombok</artifactId";
        assert_eq!(locate_version_offset(text), None);
    }

    #[test]
    fn test_self_closing_dependency_resets_the_block() {
        let text = "<project><dependencies>\
                    <dependency/>\
                    <dependency><artifactId>lombok</artifactId><version>1.18.20</version></dependency>\
                    </dependencies></project>";
        let offset = locate_version_offset(text).unwrap();
        assert_eq!(&text[offset..offset + 7], "1.18.20");
    }

    #[test]
    fn test_no_dependency_blocks() {
        let text = "<project><artifactId>lombok</artifactId><version>1.18.20</version></project>";
        assert_eq!(locate_version_offset(text), None);
    }
}
