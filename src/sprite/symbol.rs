//! Symbol construction.
//!
//! Derives the symbol identifier and viewBox from a parsed fragment and
//! wraps the fragment's content in a serialized `<symbol>` element.

use std::path::Path;

use quick_xml::escape::escape;

use super::fragment::SvgFragment;

/// A symbol ready to be appended to the sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub id: String,
    /// Serialized `<symbol>` markup.
    pub serialized: String,
}

/// Build a symbol from a parsed fragment and the path it came from.
///
/// Pure function of its inputs. The identifier is never validated for
/// XML-name legality or checked for uniqueness; duplicate ids across
/// files are accepted.
pub fn build_symbol(fragment: &SvgFragment, path: &Path) -> Symbol {
    let id = derive_id(fragment, path);
    let view_box = derive_view_box(fragment);
    let serialized = serialize_symbol(&id, &view_box, &fragment.content);
    Symbol { id, serialized }
}

/// Use the svg's id or base it on the file name.
///
/// An empty `id=""` falls through to the file name, which is truncated at
/// its first dot: `icon.min.svg` -> `icon`.
fn derive_id(fragment: &SvgFragment, path: &Path) -> String {
    if let Some(id) = fragment.id.as_deref()
        && !id.is_empty()
    {
        return id.to_string();
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name.to_string(),
    }
}

/// Get the viewBox for a symbol from the original svg element.
///
/// The element's own `viewBox` wins, verbatim. Without one, numeric
/// `width`/`height` yield `0 0 <width> <height>`, and anything else the
/// empty string.
fn derive_view_box(fragment: &SvgFragment) -> String {
    if let Some(view_box) = &fragment.view_box {
        return view_box.clone();
    }

    if let (Some(width), Some(height)) = (
        fragment.width.as_deref().and_then(parse_dimension),
        fragment.height.as_deref().and_then(parse_dimension),
    ) {
        return format!("0 0 {width} {height}");
    }

    String::new()
}

/// Parse a dimension attribute as its longest leading numeric prefix, so
/// `16px` and `100%` still count as numbers.
fn parse_dimension(value: &str) -> Option<f64> {
    let value = value.trim_start();
    for end in (1..=value.len()).rev() {
        if !value.is_char_boundary(end) {
            continue;
        }
        if let Ok(n) = value[..end].parse::<f64>() {
            return (!n.is_nan()).then_some(n);
        }
    }
    None
}

/// Serialize `<symbol id viewBox>content</symbol>`.
///
/// The viewBox attribute is set even when empty. Content is spliced in
/// raw; it is already-serialized markup taken verbatim from the source.
fn serialize_symbol(id: &str, view_box: &str, content: &str) -> String {
    let id = escape(id);
    let view_box = escape(view_box);
    if content.is_empty() {
        format!(r#"<symbol id="{id}" viewBox="{view_box}"/>"#)
    } else {
        format!(r#"<symbol id="{id}" viewBox="{view_box}">{content}</symbol>"#)
    }
}
