//! Error types for tree manipulation

use thiserror::Error;

use super::NodeId;

/// Errors that can occur when editing a document tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    /// Handle does not belong to this document
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Operation needs an element but got another node kind
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Text and declaration nodes cannot hold children
    #[error("node {0} cannot contain children")]
    NotAContainer(NodeId),

    /// The document node is the tree root and cannot be inserted anywhere
    #[error("the document node cannot be inserted as a child")]
    DocumentNode,

    /// Insertion would make a node its own ancestor
    #[error("inserting node {child} under node {parent} would create a cycle")]
    Cycle { child: NodeId, parent: NodeId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display() {
        let err = DomError::Cycle {
            child: NodeId::from_index(1),
            parent: NodeId::from_index(2),
        };
        assert_eq!(
            err.to_string(),
            "inserting node #1 under node #2 would create a cycle"
        );
    }
}
