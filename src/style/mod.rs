//! Mapping of device paint and line settings to SVG presentation attributes

pub mod line;
pub mod paint;

pub use line::{LineCap, LineJoin, LineStyleError, LineType};
pub use paint::{set_fill, set_stroke, StrokeStyle, MIN_STROKE_WIDTH};
