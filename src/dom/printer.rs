//! Serialization of a document through `quick_xml::Writer`

use std::io::{self, Write};

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::document::SvgDocument;
use super::node::{NodeData, NodeId};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options controlling the printed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// No whitespace between elements
    pub compact: bool,
    /// Spaces per nesting level when not compact
    pub indent: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            compact: false,
            indent: 2,
        }
    }
}

impl PrintOptions {
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }
}

/// Write the document to `sink`
///
/// The sink is flushed but not closed. Pretty output ends with a newline.
pub fn write_document<W: Write>(
    doc: &SvgDocument,
    sink: &mut W,
    options: PrintOptions,
) -> io::Result<()> {
    if doc.bom() {
        sink.write_all(UTF8_BOM)?;
    }

    {
        let mut writer = if options.compact {
            Writer::new(&mut *sink)
        } else {
            Writer::new_with_indent(&mut *sink, b' ', options.indent)
        };
        for &child in doc.children(NodeId::DOCUMENT) {
            write_node(doc, child, &mut writer)?;
        }
    }

    if !options.compact && !doc.is_empty() {
        sink.write_all(b"\n")?;
    }
    sink.flush()
}

/// Render the document into a string
pub fn to_string(doc: &SvgDocument, options: PrintOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_document(doc, &mut buf, options);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_node<W: Write>(doc: &SvgDocument, id: NodeId, writer: &mut Writer<W>) -> io::Result<()> {
    let Some(data) = doc.data(id) else {
        return Ok(());
    };

    match data {
        NodeData::Document => {}
        NodeData::Declaration => {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        NodeData::Text(text) => {
            if text.cdata {
                writer.write_event(Event::CData(BytesCData::new(text.content.as_str())))?;
            } else {
                writer.write_event(Event::Text(BytesText::new(&text.content)))?;
            }
        }
        NodeData::Element(el) => {
            let mut start = BytesStart::new(el.name());
            for attr in el.attributes() {
                start.push_attribute((attr.name.as_str(), attr.value.as_str()));
            }

            let children = doc.children(id);
            if children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for &child in children {
                    write_node(doc, child, writer)?;
                }
                writer.write_event(Event::End(BytesEnd::new(el.name())))?;
            }
        }
    }
    Ok(())
}
