//! The document arena and tree editing operations

use super::error::DomError;
use super::node::{Element, Node, NodeData, NodeId, Text};

/// Where a child is inserted among its new siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertAt {
    First,
    Last,
}

/// An SVG document owning every node created through it
#[derive(Debug, Clone)]
pub struct SvgDocument {
    nodes: Vec<Node>,
    bom: bool,
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            bom: false,
        }
    }
}

impl SvgDocument {
    /// Create an empty document without declaration or BOM
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a UTF-8 byte-order mark is written before the content
    pub fn bom(&self) -> bool {
        self.bom
    }

    pub fn set_bom(&mut self, bom: bool) {
        self.bom = bom;
    }

    /// Number of nodes in the arena, including the document node
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[NodeId::DOCUMENT.index()].children.is_empty()
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a detached XML declaration node
    pub fn new_declaration(&mut self) -> NodeId {
        self.alloc(NodeData::Declaration)
    }

    /// Create a detached element
    pub fn new_element(&mut self, name: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Element(Element::new(name)))
    }

    /// Create a detached text node
    pub fn new_text(&mut self, content: impl Into<String>, cdata: bool) -> NodeId {
        self.alloc(NodeData::Text(Text {
            content: content.into(),
            cdata,
        }))
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.index()).ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.index()).ok_or(DomError::UnknownNode(id))
    }

    /// Payload of a node, if the handle is valid
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index()).map(|n| &n.data)
    }

    pub fn element(&self, id: NodeId) -> Result<&Element, DomError> {
        match &self.node(id)?.data {
            NodeData::Element(el) => Ok(el),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element(el) => Ok(el),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&Text> {
        match self.data(id)? {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Children in document order; empty for unknown handles
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// First element child, optionally restricted to a tag name
    pub fn first_child_element(&self, id: NodeId, name: Option<&str>) -> Option<NodeId> {
        self.children(id).iter().copied().find(|&child| {
            matches!(
                self.data(child),
                Some(NodeData::Element(el)) if name.map_or(true, |n| el.name() == n)
            )
        })
    }

    /// The top-level element of the document, usually `<svg>`
    pub fn root_element(&self) -> Option<NodeId> {
        self.first_child_element(NodeId::DOCUMENT, None)
    }

    /// Insert `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_child(parent, child, InsertAt::Last)
    }

    /// Insert `child` as the first child of `parent`
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_child(parent, child, InsertAt::First)
    }

    fn insert_child(&mut self, parent: NodeId, child: NodeId, at: InsertAt) -> Result<(), DomError> {
        self.node(child)?;
        if !self.node(parent)?.data.is_container() {
            return Err(DomError::NotAContainer(parent));
        }
        if child == NodeId::DOCUMENT {
            return Err(DomError::DocumentNode);
        }
        if self.is_self_or_ancestor(child, parent) {
            return Err(DomError::Cycle { child, parent });
        }

        if let Some(old_parent) = self.parent(child) {
            tracing::debug!(%child, from = %old_parent, to = %parent, "moving node");
        }
        self.detach(child)?;

        let node = self.node_mut(parent)?;
        match at {
            InsertAt::First => node.children.insert(0, child),
            InsertAt::Last => node.children.push(child),
        }
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Unlink a node from its parent; the node stays owned by the document
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|&c| c != id);
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    /// Whether `candidate` is `node` itself or one of its ancestors
    fn is_self_or_ancestor(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}
