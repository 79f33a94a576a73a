//! Node types stored in the document arena

use std::fmt;

/// Handle to a node inside an [`SvgDocument`](super::SvgDocument)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The document node, root of every tree
    pub const DOCUMENT: NodeId = NodeId(0);

    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single `name="value"` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Named element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, overwriting in place if it already exists
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(pos).value)
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// Character data, optionally emitted as a CDATA section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub cdata: bool,
}

/// Payload of an arena node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    /// `<?xml version="1.0" encoding="UTF-8"?>`
    Declaration,
    Element(Element),
    Text(Text),
}

impl NodeData {
    /// Whether nodes of this kind may hold children
    pub fn is_container(&self) -> bool {
        matches!(self, NodeData::Document | NodeData::Element(_))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: vec![],
            data,
        }
    }
}
