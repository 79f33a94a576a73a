//! svg-attrs - SVG attribute formatting and document assembly for graphics devices
//!
//! This library turns device drawing settings (packed colors, line widths,
//! line type/join/cap codes) into SVG presentation attributes, and provides
//! a small owned XML tree to hang them on.
//!
//! # Example
//!
//! ```rust
//! use svg_attrs::{append_element, new_svg_doc, new_svg_element, set_fill, set_stroke, svg_to_file};
//! use svg_attrs::dom::NodeId;
//!
//! let mut doc = new_svg_doc(false, false);
//! let svg = new_svg_element("svg", &mut doc);
//! append_element(&mut doc, svg, NodeId::DOCUMENT).unwrap();
//!
//! let line = new_svg_element("line", &mut doc);
//! let red = 0xFF0000FFu32 as i32;
//! set_stroke(doc.element_mut(line).unwrap(), 1.0, red, 0x42, 2, 2);
//! set_fill(doc.element_mut(line).unwrap(), 0);
//! append_element(&mut doc, line, svg).unwrap();
//!
//! let mut out = Vec::new();
//! svg_to_file(&doc, &mut out, true).unwrap();
//! let svg = String::from_utf8(out).unwrap();
//! assert!(svg.contains(r#"stroke-dasharray="2,4""#));
//! ```

pub mod color;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod style;
pub mod swatch;

use std::io::Write;

pub use color::{Color, ColorError};
pub use config::{ConfigError, SvgConfig};
pub use dom::{DomError, Element, NodeId, PrintOptions, SvgDocument};
pub use error::SvgError;
pub use format::{format, format_bounded, FormatValue, Formatted};
pub use style::{set_fill, set_stroke, LineCap, LineJoin, LineType, StrokeStyle};
pub use swatch::Swatch;

/// Look up an attribute value on an element
pub fn svg_attribute<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element.attribute(name)
}

/// Set or overwrite an attribute on an element
pub fn set_attr(element: &mut Element, name: &str, value: &str) {
    element.set_attribute(name, value);
}

/// Create a document, optionally with a BOM and a leading XML declaration
pub fn new_svg_doc(declaration: bool, bom: bool) -> SvgDocument {
    let mut doc = SvgDocument::new();
    doc.set_bom(bom);
    if declaration {
        let decl = doc.new_declaration();
        // A fresh declaration under the document node is always valid.
        let _ = doc.append_child(NodeId::DOCUMENT, decl);
    }
    doc
}

/// Create an element owned by `doc`, not yet attached
pub fn new_svg_element(name: &str, doc: &mut SvgDocument) -> NodeId {
    doc.new_element(name)
}

/// Create a text node owned by `doc`, optionally emitted as CDATA
pub fn new_svg_text(text: &str, doc: &mut SvgDocument, cdata: bool) -> NodeId {
    doc.new_text(text, cdata)
}

/// Insert `child` as the last child of `parent`
pub fn append_element(doc: &mut SvgDocument, child: NodeId, parent: NodeId) -> Result<(), DomError> {
    doc.append_child(parent, child)
}

/// Insert `child` as the first child of `parent`
pub fn prepend_element(
    doc: &mut SvgDocument,
    child: NodeId,
    parent: NodeId,
) -> Result<(), DomError> {
    doc.prepend_child(parent, child)
}

/// Serialize the document to `sink`, compact or indented
///
/// The sink is flushed but stays open.
pub fn svg_to_file<W: Write>(doc: &SvgDocument, sink: &mut W, compact: bool) -> Result<(), SvgError> {
    let options = if compact {
        PrintOptions::compact()
    } else {
        PrintOptions::default()
    };
    dom::write_document(doc, sink, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_svg_doc_with_declaration() {
        let doc = new_svg_doc(true, false);
        let first = doc.children(NodeId::DOCUMENT)[0];
        assert_eq!(doc.data(first), Some(&dom::NodeData::Declaration));
        assert!(!doc.bom());
    }

    #[test]
    fn test_new_svg_doc_bare() {
        let doc = new_svg_doc(false, true);
        assert!(doc.is_empty());
        assert!(doc.bom());
    }

    #[test]
    fn test_set_attr_round_trip() {
        let mut doc = new_svg_doc(false, false);
        let el = new_svg_element("g", &mut doc);
        let element = doc.element_mut(el).unwrap();
        set_attr(element, "transform", "translate(1.00,2.00)");
        assert_eq!(svg_attribute(element, "transform"), Some("translate(1.00,2.00)"));
        assert_eq!(svg_attribute(element, "missing"), None);
    }

    #[test]
    fn test_append_then_prepend() {
        let mut doc = new_svg_doc(false, false);
        let parent = new_svg_element("g", &mut doc);
        let appended = new_svg_element("rect", &mut doc);
        let prepended = new_svg_element("circle", &mut doc);

        append_element(&mut doc, appended, parent).unwrap();
        prepend_element(&mut doc, prepended, parent).unwrap();

        assert_eq!(doc.children(parent), &[prepended, appended]);
    }

    #[test]
    fn test_new_svg_text_flags() {
        let mut doc = new_svg_doc(false, false);
        let plain = new_svg_text("a", &mut doc, false);
        let cdata = new_svg_text("b", &mut doc, true);
        assert!(!doc.text(plain).unwrap().cdata);
        assert!(doc.text(cdata).unwrap().cdata);
        assert_eq!(doc.text(cdata).unwrap().content, "b");
    }
}
