//! Crate-level error type

use thiserror::Error;

use crate::color::ColorError;
use crate::config::ConfigError;
use crate::dom::DomError;
use crate::style::LineStyleError;

/// Errors that can occur while building or writing an SVG document
#[derive(Debug, Error)]
pub enum SvgError {
    /// Invalid tree operation
    #[error("document error: {0}")]
    Dom(#[from] DomError),

    /// Failure writing to the output sink
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Color(#[from] ColorError),

    #[error("{0}")]
    LineStyle(#[from] LineStyleError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;

    #[test]
    fn test_dom_error_display() {
        let err: SvgError = DomError::NotAnElement(NodeId::from_index(3)).into();
        assert_eq!(err.to_string(), "document error: node #3 is not an element");
    }

    #[test]
    fn test_color_error_display() {
        let err: SvgError = ColorError::InvalidFormat("red".to_string()).into();
        assert!(err.to_string().contains("'red'"));
    }
}
