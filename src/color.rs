//! Packed RGBA colors as supplied by the graphics device
//!
//! A packed color stores red in the low byte, followed by green, blue and
//! alpha in the high byte.

use std::str::FromStr;

use thiserror::Error;

use crate::format::format;

/// Errors that can occur when parsing a color string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color '{0}': expected #RRGGBB, #RRGGBBAA or 'none'")]
    InvalidFormat(String),
}

/// An immutable red/green/blue/alpha quadruple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Fully transparent white, the device's "no paint" value
    pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Decode a packed device color
    pub const fn from_packed(packed: i32) -> Self {
        let bits = packed as u32;
        Self {
            red: (bits & 0xff) as u8,
            green: ((bits >> 8) & 0xff) as u8,
            blue: ((bits >> 16) & 0xff) as u8,
            alpha: ((bits >> 24) & 0xff) as u8,
        }
    }

    /// Encode back into the packed device representation
    pub const fn packed(&self) -> i32 {
        let bits = (self.red as u32)
            | ((self.green as u32) << 8)
            | ((self.blue as u32) << 16)
            | ((self.alpha as u32) << 24);
        bits as i32
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha == 0
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0
    }

    /// `#RRGGBB` with upper-case hex digits; alpha is not included
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Alpha as a fraction of 255, two decimals
    pub fn opacity(&self) -> String {
        format(f64::from(self.alpha) / 255.0)
    }
}

impl From<i32> for Color {
    fn from(packed: i32) -> Self {
        Self::from_packed(packed)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse `#RRGGBB`, `#RRGGBBAA`, `none` or `transparent`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }

        let invalid = || ColorError::InvalidFormat(s.to_string());
        let digits = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => Err(invalid()),
        }
    }
}
