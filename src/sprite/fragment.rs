//! SVG fragment parsing.
//!
//! Strict XML parsing of one input file: locate the root `<svg>` element,
//! capture the attributes that drive symbol construction, and slice the
//! element's inner markup out of the source text verbatim.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::SpriteError;

/// Parsed view of one input file's root `<svg>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgFragment {
    pub id: Option<String>,
    pub view_box: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Inner markup of the root element, byte-for-byte as it appears in
    /// the source text.
    pub content: String,
}

/// Parse `content` as strict XML and extract its root `<svg>` element.
///
/// The root element must have local name `svg` (namespace prefixes are
/// accepted). `path` only labels errors.
pub fn parse_fragment(content: &str, path: &Path) -> Result<SvgFragment, SpriteError> {
    let mut reader = Reader::from_str(content);

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem)) => {
                if elem.local_name().as_ref() != b"svg" {
                    return Err(SpriteError::MissingRoot(path.to_path_buf()));
                }
                // read_to_end validates everything up to the matching end
                // tag and hands back the span of the inner markup
                let span = reader
                    .read_to_end(elem.name())
                    .map_err(|e| SpriteError::Parse(path.to_path_buf(), e))?;
                let inner = &content[span.start as usize..span.end as usize];
                return fragment_from_root(&elem, inner, path);
            }
            Ok(Event::Empty(elem)) => {
                if elem.local_name().as_ref() != b"svg" {
                    return Err(SpriteError::MissingRoot(path.to_path_buf()));
                }
                return fragment_from_root(&elem, "", path);
            }
            Ok(Event::Eof) => return Err(SpriteError::MissingRoot(path.to_path_buf())),
            // Prolog: declaration, doctype, comments, whitespace
            Ok(_) => {}
            Err(e) => return Err(SpriteError::Parse(path.to_path_buf(), e)),
        }
    }
}

/// Pull the interesting attributes off the root element.
fn fragment_from_root(
    elem: &BytesStart<'_>,
    inner: &str,
    path: &Path,
) -> Result<SvgFragment, SpriteError> {
    let mut fragment = SvgFragment {
        id: None,
        view_box: None,
        width: None,
        height: None,
        content: inner.to_string(),
    };

    for attr in elem.attributes() {
        let attr = attr.map_err(|e| SpriteError::Parse(path.to_path_buf(), e.into()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| SpriteError::Parse(path.to_path_buf(), e.into()))?;
        match attr.key.as_ref() {
            b"id" => fragment.id = Some(value.into_owned()),
            b"viewBox" => fragment.view_box = Some(value.into_owned()),
            b"width" => fragment.width = Some(value.into_owned()),
            b"height" => fragment.height = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<SvgFragment, SpriteError> {
        parse_fragment(content, &PathBuf::from("test.svg"))
    }

    #[test]
    fn test_root_attributes() {
        let fragment = parse(
            r#"<svg id="icon-a" viewBox="0 0 24 24" width="24" height="24"><path d="M0 0h24v24H0z"/></svg>"#,
        )
        .unwrap();

        assert_eq!(fragment.id.as_deref(), Some("icon-a"));
        assert_eq!(fragment.view_box.as_deref(), Some("0 0 24 24"));
        assert_eq!(fragment.width.as_deref(), Some("24"));
        assert_eq!(fragment.height.as_deref(), Some("24"));
        assert_eq!(fragment.content, r#"<path d="M0 0h24v24H0z"/>"#);
    }

    #[test]
    fn test_inner_markup_is_verbatim() {
        // Entities, comments and odd whitespace must survive untouched
        let inner = "\n  <!-- tick -->\n  <text>a &amp; b</text>\n  <g  ><circle r=\"8\"/></g>\n";
        let fragment = parse(&format!("<svg>{inner}</svg>")).unwrap();
        assert_eq!(fragment.content, inner);
    }

    #[test]
    fn test_self_closing_root() {
        let fragment = parse(r#"<svg width="16" height="16"/>"#).unwrap();
        assert_eq!(fragment.content, "");
        assert_eq!(fragment.width.as_deref(), Some("16"));
    }

    #[test]
    fn test_prolog_is_skipped() {
        let fragment = parse(
            "<?xml version=\"1.0\"?>\n<!-- header -->\n<svg id=\"x\"><rect/></svg>",
        )
        .unwrap();
        assert_eq!(fragment.id.as_deref(), Some("x"));
        assert_eq!(fragment.content, "<rect/>");
    }

    #[test]
    fn test_namespaced_root_is_accepted() {
        let fragment =
            parse(r#"<s:svg xmlns:s="http://www.w3.org/2000/svg"><s:rect/></s:svg>"#).unwrap();
        assert_eq!(fragment.content, "<s:rect/>");
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let fragment = parse(r#"<svg id="a&amp;b"/>"#).unwrap();
        assert_eq!(fragment.id.as_deref(), Some("a&b"));
    }

    #[test]
    fn test_non_svg_root_is_rejected() {
        assert!(matches!(
            parse("<html><svg/></html>"),
            Err(SpriteError::MissingRoot(_))
        ));
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(parse(""), Err(SpriteError::MissingRoot(_))));
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        assert!(matches!(
            parse("<svg><path></svg>"),
            Err(SpriteError::Parse(..))
        ));
        assert!(parse("<svg").is_err());
    }
}
