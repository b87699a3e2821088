//! XML pretty-printer
//!
//! Streams the document token-by-token through a quick-xml reader/writer
//! pair instead of building a DOM: start tags, end tags, character data,
//! CDATA, comments, processing instructions and declarations all pass
//! through, re-indented at 2 spaces. Whitespace-only character data is
//! dropped during the read so re-indenting an already-indented document
//! reproduces it exactly.

use std::io::Cursor;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use super::FormatError;

/// Re-indent an XML document at 2 spaces.
///
/// Empty or whitespace-only input yields an empty string. Output is trimmed
/// and carries exactly one trailing newline. Unbalanced elements at end of
/// input are an error.
pub fn pretty_print(input: &str) -> Result<String, FormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let mut reader = Reader::from_str(trimmed);
    reader.trim_text(true);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => {
                match &event {
                    Event::Start(_) => depth += 1,
                    Event::End(_) => depth = depth.saturating_sub(1),
                    _ => {}
                }
                writer.write_event(event)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if depth != 0 {
        return Err(FormatError::UnclosedElement(depth));
    }

    let bytes = writer.into_inner().into_inner();
    let out = String::from_utf8(bytes)?;
    Ok(format!("{}\n", out.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindents_nested_elements() {
        let out = pretty_print(r#"<root><item id="1">x</item><empty/></root>"#).unwrap();
        assert_eq!(
            out,
            "<root>\n  <item id=\"1\">x</item>\n  <empty/>\n</root>\n"
        );
    }

    #[test]
    fn test_declaration_and_comment_pass_through() {
        let out =
            pretty_print("<?xml version=\"1.0\" encoding=\"utf-8\"?><a><!-- note --><b/></a>")
                .unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a>\n  <!-- note -->\n  <b/>\n</a>\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let once = pretty_print("<a>\n   <b attr='v'>text</b>\n\n<c/></a>").unwrap();
        let twice = pretty_print(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_exactly_one_trailing_newline() {
        let out = pretty_print("<a/>").unwrap();
        assert_eq!(out, "<a/>\n");
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_entities_stay_escaped() {
        let out = pretty_print("<a>x &amp; y</a>").unwrap();
        assert_eq!(out, "<a>x &amp; y</a>\n");
    }

    #[test]
    fn test_mismatched_end_tag_errors() {
        assert!(pretty_print("<a><b></a>").is_err());
    }

    #[test]
    fn test_unclosed_element_errors() {
        let err = pretty_print("<a><b>").unwrap_err();
        assert!(matches!(err, FormatError::UnclosedElement(2)));
    }
}
