//! Arena-owned XML document tree
//!
//! Nodes are created through an [`SvgDocument`] and referenced by [`NodeId`]
//! handles. The document owns every node it created, attached or not; only
//! nodes reachable from the document node are printed.

pub mod document;
pub mod error;
pub mod node;
pub mod printer;

pub use document::SvgDocument;
pub use error::DomError;
pub use node::{Attribute, Element, NodeData, NodeId, Text};
pub use printer::{write_document, PrintOptions};
