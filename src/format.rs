//! Numeric and string formatting for attribute values
//!
//! Every function returns an owned string, so formatting never shares state
//! between calls.

use std::fmt::{self, Write};

/// Capacity of the bounded formatter, including the terminator slot.
pub const FMT_BUFFER_SIZE: usize = 200;

/// A value that can be rendered as an SVG attribute number
pub trait FormatValue {
    /// Render the value as attribute text
    fn format_value(&self) -> String;
}

impl FormatValue for f64 {
    /// Two decimals, independent of any locale
    fn format_value(&self) -> String {
        format!("{:.2}", self)
    }
}

impl FormatValue for f32 {
    fn format_value(&self) -> String {
        f64::from(*self).format_value()
    }
}

macro_rules! impl_format_integer {
    ($($t:ty),*) => {
        $(
            impl FormatValue for $t {
                fn format_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_format_integer!(i32, i64, u32, u64, usize);

/// Format a number for use as an attribute value
///
/// Floats get exactly two decimals (`3.14159` → `"3.14"`), integers are
/// rendered in plain decimal.
pub fn format(value: impl FormatValue) -> String {
    value.format_value()
}

/// Result of a bounded formatting call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    text: String,
    truncated: bool,
}

impl Formatted {
    /// The formatted text, at most `FMT_BUFFER_SIZE - 1` bytes
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether output was dropped to fit the buffer
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Formatted {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Format arguments into at most `FMT_BUFFER_SIZE - 1` bytes
///
/// Overflowing output is cut on a char boundary and reported through
/// [`Formatted::is_truncated`].
pub fn format_bounded(args: fmt::Arguments<'_>) -> Formatted {
    let mut text = String::with_capacity(FMT_BUFFER_SIZE);
    // Writing into a String cannot fail.
    let _ = text.write_fmt(args);

    let limit = FMT_BUFFER_SIZE - 1;
    if text.len() <= limit {
        return Formatted {
            text,
            truncated: false,
        };
    }

    let full_len = text.len();
    let mut cut = limit;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    tracing::debug!(full_len, kept = cut, "bounded format truncated");

    Formatted {
        text,
        truncated: true,
    }
}

/// `format!`-style front end for [`format_bounded`]
#[macro_export]
macro_rules! format_bounded {
    ($($arg:tt)*) => {
        $crate::format::format_bounded(::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float_two_decimals() {
        assert_eq!(format(3.14159), "3.14");
        assert_eq!(format(1.0), "1.00");
        assert_eq!(format(0.75), "0.75");
    }

    #[test]
    fn test_format_negative_near_zero_keeps_sign() {
        assert_eq!(format(-0.004), "-0.00");
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format(42), "42");
        assert_eq!(format(-7), "-7");
        assert_eq!(format(12usize), "12");
    }

    #[test]
    fn test_format_f32() {
        assert_eq!(format(2.5f32), "2.50");
    }

    #[test]
    fn test_bounded_short_output() {
        let out = format_bounded!("{}-{}", "a", 1);
        assert_eq!(out.as_str(), "a-1");
        assert!(!out.is_truncated());
    }

    #[test]
    fn test_bounded_exact_limit_not_truncated() {
        let s = "x".repeat(FMT_BUFFER_SIZE - 1);
        let out = format_bounded!("{}", s);
        assert_eq!(out.as_str().len(), FMT_BUFFER_SIZE - 1);
        assert!(!out.is_truncated());
    }

    #[test]
    fn test_bounded_overflow_truncates() {
        let s = "y".repeat(500);
        let out = format_bounded!("{}", s);
        assert_eq!(out.as_str().len(), FMT_BUFFER_SIZE - 1);
        assert!(out.is_truncated());
    }

    #[test]
    fn test_bounded_truncates_on_char_boundary() {
        // 'é' is two bytes, so byte 199 falls inside a character
        let s = "é".repeat(150);
        let out = format_bounded!("{}", s);
        assert!(out.is_truncated());
        assert_eq!(out.as_str().len(), 198);
        assert!(out.as_str().chars().all(|c| c == 'é'));
    }
}
