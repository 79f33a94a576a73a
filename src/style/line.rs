//! Line type, join and cap codes of the graphics device

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing line style names
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LineStyleError {
    #[error("invalid line type '{0}': expected a name or 2, 4, 6 or 8 hex digits")]
    InvalidLineType(String),
    #[error("unknown line join '{0}' (valid: round, mitre, bevel)")]
    UnknownJoin(String),
    #[error("unknown line cap '{0}' (valid: round, butt, square)")]
    UnknownCap(String),
}

/// Packed dash pattern
///
/// Each 4-bit nibble, low nibble first, is a segment length multiplier.
/// Negative values and the two sentinels draw no dashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineType(pub i32);

impl LineType {
    pub const BLANK: LineType = LineType(-1);
    pub const SOLID: LineType = LineType(0);
    pub const DASHED: LineType = LineType(0x44);
    pub const DOTTED: LineType = LineType(0x31);
    pub const DOTDASH: LineType = LineType(0x3431);
    pub const LONGDASH: LineType = LineType(0x37);
    pub const TWODASH: LineType = LineType(0x2622);

    pub fn code(self) -> i32 {
        self.0
    }

    /// `stroke-dasharray` value for a line of the given width
    ///
    /// The width is truncated to an integer before it scales the segments.
    /// The first nibble is always emitted; later nibbles stop at the first
    /// zero.
    pub fn dash_array(self, width: f64) -> Option<String> {
        if self == Self::BLANK || self == Self::SOLID {
            return None;
        }

        let lwd = width as i32;
        let mut lty = self.0;
        let mut dashes = vec![lwd.saturating_mul(lty & 15).to_string()];
        lty >>= 4;
        for _ in 0..8 {
            if lty & 15 == 0 {
                break;
            }
            dashes.push(lwd.saturating_mul(lty & 15).to_string());
            lty >>= 4;
        }
        Some(dashes.join(","))
    }
}

impl From<i32> for LineType {
    fn from(code: i32) -> Self {
        LineType(code)
    }
}

impl FromStr for LineType {
    type Err = LineStyleError;

    /// Parse a preset name or a string of hex digits, first digit lowest
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "blank" => return Ok(Self::BLANK),
            "solid" => return Ok(Self::SOLID),
            "dashed" => return Ok(Self::DASHED),
            "dotted" => return Ok(Self::DOTTED),
            "dotdash" => return Ok(Self::DOTDASH),
            "longdash" => return Ok(Self::LONGDASH),
            "twodash" => return Ok(Self::TWODASH),
            _ => {}
        }

        let invalid = || LineStyleError::InvalidLineType(s.to_string());
        if !matches!(name.len(), 2 | 4 | 6 | 8) {
            return Err(invalid());
        }

        let mut code: u32 = 0;
        for (i, c) in name.chars().enumerate() {
            let digit = c.to_digit(16).filter(|&d| d > 0).ok_or_else(invalid)?;
            code |= digit << (4 * i);
        }
        Ok(LineType(code as i32))
    }
}

/// Line join style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineJoin {
    #[default]
    Round,
    Mitre,
    Bevel,
}

impl LineJoin {
    /// Decode a device join code; unknown codes fall back to round
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => LineJoin::Mitre,
            3 => LineJoin::Bevel,
            _ => LineJoin::Round,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            LineJoin::Round => 1,
            LineJoin::Mitre => 2,
            LineJoin::Bevel => 3,
        }
    }

    /// `stroke-linejoin` keyword
    pub fn as_svg(self) -> &'static str {
        match self {
            LineJoin::Round => "round",
            LineJoin::Mitre => "miter",
            LineJoin::Bevel => "bevel",
        }
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_svg())
    }
}

impl FromStr for LineJoin {
    type Err = LineStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round" => Ok(LineJoin::Round),
            "mitre" | "miter" => Ok(LineJoin::Mitre),
            "bevel" => Ok(LineJoin::Bevel),
            _ => Err(LineStyleError::UnknownJoin(s.to_string())),
        }
    }
}

/// Line end cap style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    #[default]
    Round,
    Butt,
    Square,
}

impl LineCap {
    /// Decode a device cap code; unknown codes fall back to round
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => LineCap::Butt,
            3 => LineCap::Square,
            _ => LineCap::Round,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            LineCap::Round => 1,
            LineCap::Butt => 2,
            LineCap::Square => 3,
        }
    }

    /// `stroke-linecap` keyword
    pub fn as_svg(self) -> &'static str {
        match self {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
            LineCap::Square => "square",
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_svg())
    }
}

impl FromStr for LineCap {
    type Err = LineStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round" => Ok(LineCap::Round),
            "butt" => Ok(LineCap::Butt),
            "square" => Ok(LineCap::Square),
            _ => Err(LineStyleError::UnknownCap(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_have_no_dashes() {
        assert_eq!(LineType::SOLID.dash_array(2.0), None);
        assert_eq!(LineType::BLANK.dash_array(2.0), None);
    }

    #[test]
    fn test_two_nibble_pattern() {
        assert_eq!(LineType(0x42).dash_array(1.0), Some("2,4".to_string()));
    }

    #[test]
    fn test_presets() {
        assert_eq!(LineType::DASHED.dash_array(1.0), Some("4,4".to_string()));
        assert_eq!(LineType::DOTDASH.dash_array(1.0), Some("1,3,4,3".to_string()));
        assert_eq!(LineType::TWODASH.dash_array(2.0), Some("4,4,12,4".to_string()));
    }

    #[test]
    fn test_width_truncated_before_multiply() {
        // 2.9 truncates to 2, so 2 * 3 = 6 rather than round(2.9 * 3) = 9
        assert_eq!(LineType(0x13).dash_array(2.9), Some("6,2".to_string()));
        // Sub-pixel widths collapse every segment to zero
        assert_eq!(LineType(0x44).dash_array(0.5), Some("0,0".to_string()));
    }

    #[test]
    fn test_zero_nibble_stops_run() {
        // Nibbles [3, 0, 5]: the 5 after the gap is never reached
        assert_eq!(LineType(0x503).dash_array(1.0), Some("3".to_string()));
    }

    #[test]
    fn test_first_nibble_always_emitted() {
        assert_eq!(LineType(0x40).dash_array(1.0), Some("0,4".to_string()));
    }

    #[test]
    fn test_eight_nibbles() {
        assert_eq!(
            LineType(0x7654_3211).dash_array(1.0),
            Some("1,1,2,3,4,5,6,7".to_string())
        );
    }

    #[test]
    fn test_parse_line_type() {
        assert_eq!("dashed".parse::<LineType>(), Ok(LineType::DASHED));
        assert_eq!("Solid".parse::<LineType>(), Ok(LineType::SOLID));
        assert_eq!("13".parse::<LineType>(), Ok(LineType(0x31)));
        assert_eq!("44".parse::<LineType>(), Ok(LineType(0x44)));
        assert_eq!("1F".parse::<LineType>(), Ok(LineType(0xF1)));
        assert!("123".parse::<LineType>().is_err());
        assert!("10".parse::<LineType>().is_err());
        assert!("zz".parse::<LineType>().is_err());
    }

    #[test]
    fn test_join_codes() {
        assert_eq!(LineJoin::from_code(1).as_svg(), "round");
        assert_eq!(LineJoin::from_code(2).as_svg(), "miter");
        assert_eq!(LineJoin::from_code(3).as_svg(), "bevel");
        assert_eq!(LineJoin::from_code(42).as_svg(), "round");
        assert_eq!(LineJoin::from_code(LineJoin::Bevel.code()), LineJoin::Bevel);
    }

    #[test]
    fn test_cap_codes() {
        assert_eq!(LineCap::from_code(1).as_svg(), "round");
        assert_eq!(LineCap::from_code(2).as_svg(), "butt");
        assert_eq!(LineCap::from_code(3).as_svg(), "square");
        assert_eq!(LineCap::from_code(0).as_svg(), "round");
    }

    #[test]
    fn test_parse_join_and_cap() {
        assert_eq!("mitre".parse::<LineJoin>(), Ok(LineJoin::Mitre));
        assert_eq!("miter".parse::<LineJoin>(), Ok(LineJoin::Mitre));
        assert_eq!("square".parse::<LineCap>(), Ok(LineCap::Square));
        assert!("pointy".parse::<LineCap>().is_err());
    }
}
