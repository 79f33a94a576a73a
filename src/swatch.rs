//! Single-shape preview of a fill and stroke mapping

use crate::color::Color;
use crate::config::SvgConfig;
use crate::dom::{printer, NodeId, SvgDocument};
use crate::error::SvgError;
use crate::format::format;
use crate::style::{set_fill, StrokeStyle};
use crate::{append_element, new_svg_element, new_svg_text};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A rectangle painted with a given fill and stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: StrokeStyle,
    /// Optional `<desc>` text
    pub description: Option<String>,
}

impl Default for Swatch {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            fill: Color::TRANSPARENT,
            stroke: StrokeStyle::default(),
            description: None,
        }
    }
}

impl Swatch {
    /// Build the document for this swatch
    ///
    /// The rectangle is inset by a tenth of each side so wide strokes stay
    /// inside the viewport.
    pub fn to_document(&self, config: &SvgConfig) -> Result<SvgDocument, SvgError> {
        let mut doc = config.new_document();

        let svg = new_svg_element("svg", &mut doc);
        {
            let root = doc.element_mut(svg)?;
            root.set_attribute("xmlns", SVG_NAMESPACE);
            root.set_attribute("width", format(self.width));
            root.set_attribute("height", format(self.height));
            root.set_attribute(
                "viewBox",
                format!("0 0 {} {}", format(self.width), format(self.height)),
            );
        }
        append_element(&mut doc, svg, NodeId::DOCUMENT)?;

        if let Some(text) = &self.description {
            let desc = new_svg_element("desc", &mut doc);
            let body = new_svg_text(text, &mut doc, false);
            append_element(&mut doc, body, desc)?;
            append_element(&mut doc, desc, svg)?;
        }

        let rect = new_svg_element("rect", &mut doc);
        {
            let el = doc.element_mut(rect)?;
            el.set_attribute("x", format(self.width / 10.0));
            el.set_attribute("y", format(self.height / 10.0));
            el.set_attribute("width", format(self.width * 0.8));
            el.set_attribute("height", format(self.height * 0.8));
            set_fill(el, self.fill.packed());
            self.stroke.apply(el);
        }
        append_element(&mut doc, rect, svg)?;

        Ok(doc)
    }

    /// Render the swatch to an SVG string
    pub fn render(&self, config: &SvgConfig) -> Result<String, SvgError> {
        let doc = self.to_document(config)?;
        Ok(printer::to_string(&doc, config.print_options()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LineType;

    #[test]
    fn test_default_swatch_structure() {
        let config = SvgConfig::default();
        let doc = Swatch::default().to_document(&config).unwrap();

        let svg = doc.root_element().expect("root element");
        assert_eq!(doc.element(svg).unwrap().name(), "svg");
        let rect = doc.first_child_element(svg, Some("rect")).expect("rect");
        let rect = doc.element(rect).unwrap();
        assert_eq!(rect.attribute("fill"), Some("none"));
        assert_eq!(rect.attribute("stroke"), Some("#000000"));
        assert_eq!(rect.attribute("x"), Some("10.00"));
        assert_eq!(rect.attribute("width"), Some("80.00"));
    }

    #[test]
    fn test_description_precedes_rect() {
        let swatch = Swatch {
            description: Some("dashed".to_string()),
            ..Swatch::default()
        };
        let doc = swatch.to_document(&SvgConfig::default()).unwrap();
        let svg = doc.root_element().unwrap();
        let names: Vec<_> = doc
            .children(svg)
            .iter()
            .map(|&c| doc.element(c).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["desc", "rect"]);
    }

    #[test]
    fn test_render_contains_dasharray() {
        let swatch = Swatch {
            stroke: StrokeStyle::new(2.0, Color::rgb(0, 128, 0)).with_line_type(LineType::DASHED),
            ..Swatch::default()
        };
        let svg = swatch.render(&SvgConfig::default()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r##"stroke="#008000""##));
        assert!(svg.contains(r#"stroke-dasharray="8,8""#));
    }
}
