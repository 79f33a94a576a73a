//! Configuration for SVG output

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::dom::{PrintOptions, SvgDocument};

/// Errors that can occur when loading an output configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgConfig {
    /// Whether to start the document with an XML declaration
    pub declaration: bool,

    /// Whether to write a UTF-8 byte-order mark
    pub bom: bool,

    /// Whether to omit whitespace between elements
    pub compact: bool,

    /// Spaces per nesting level in pretty output
    pub indent: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            declaration: true,
            bom: false,
            compact: false,
            indent: 2,
        }
    }
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
struct TomlConfig {
    output: Option<TomlOutput>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    declaration: Option<bool>,
    bom: Option<bool>,
    compact: Option<bool>,
    indent: Option<usize>,
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Keys missing from the `[output]` table keep their default values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(output) = parsed.output {
            if let Some(declaration) = output.declaration {
                config.declaration = declaration;
            }
            if let Some(bom) = output.bom {
                config.bom = bom;
            }
            if let Some(compact) = output.compact {
                config.compact = compact;
            }
            if let Some(indent) = output.indent {
                config.indent = indent;
            }
        }

        Ok(config)
    }

    /// Set whether to emit the XML declaration
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Set whether to emit a byte-order mark
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Set whether to produce compact output
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set the indentation width for pretty output
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Start a document with this configuration's declaration and BOM
    pub fn new_document(&self) -> SvgDocument {
        crate::new_svg_doc(self.declaration, self.bom)
    }

    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            compact: self.compact,
            indent: self.indent,
        }
    }
}
