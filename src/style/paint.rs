//! Fill and stroke attribute mapping

use crate::color::Color;
use crate::dom::Element;
use crate::format::format;

use super::line::{LineCap, LineJoin, LineType};

/// Widths below this are treated as zero
pub const MIN_STROKE_WIDTH: f64 = 0.0001;

/// Set `fill` and `fill-opacity` from a packed color
pub fn set_fill(element: &mut Element, color: i32) {
    apply_paint(element, "fill", "fill-opacity", Color::from_packed(color));
}

/// Set `name` to the color, or to `none` when fully transparent
fn apply_paint(element: &mut Element, name: &str, opacity_name: &str, color: Color) {
    if color.is_transparent() {
        element.set_attribute(name, "none");
    } else {
        element.set_attribute(name, color.hex());
        element.set_attribute(opacity_name, color.opacity());
    }
}

/// A complete stroke description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in device units
    pub width: f64,
    pub color: Color,
    pub line_type: LineType,
    pub join: LineJoin,
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
            line_type: LineType::SOLID,
            join: LineJoin::Round,
            cap: LineCap::Round,
        }
    }
}

impl StrokeStyle {
    pub fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            ..Self::default()
        }
    }

    /// Build from raw device codes
    pub fn from_device(width: f64, color: i32, line_type: i32, join: i32, cap: i32) -> Self {
        Self {
            width,
            color: Color::from_packed(color),
            line_type: LineType(line_type),
            join: LineJoin::from_code(join),
            cap: LineCap::from_code(cap),
        }
    }

    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Whether only the paint attributes are emitted
    pub fn is_degenerate(&self) -> bool {
        !self.color.is_visible() || self.width < MIN_STROKE_WIDTH || self.line_type.code() < 0
    }

    /// Write the stroke attributes onto `element`
    pub fn apply(&self, element: &mut Element) {
        apply_paint(element, "stroke", "stroke-opacity", self.color);

        if self.is_degenerate() {
            tracing::debug!(
                element = element.name(),
                width = self.width,
                alpha = self.color.alpha,
                line_type = self.line_type.code(),
                "stroke has no visible detail"
            );
            return;
        }

        // 1/96 inch device units to points
        element.set_attribute("stroke-width", format(self.width * 72.0 / 96.0));
        if let Some(dashes) = self.line_type.dash_array(self.width) {
            element.set_attribute("stroke-dasharray", dashes);
        }
        element.set_attribute("stroke-linejoin", self.join.as_svg());
        element.set_attribute("stroke-linecap", self.cap.as_svg());
    }
}

/// Set the stroke attributes from raw device values
pub fn set_stroke(element: &mut Element, width: f64, color: i32, line_type: i32, join: i32, cap: i32) {
    StrokeStyle::from_device(width, color, line_type, join, cap).apply(element);
}
