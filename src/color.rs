//! Pixel colors for monochrome e-paper panels
//!
//! Pixels are packed 8 per byte, MSB first. A set bit is white.
//!
//! ## Example
//!
//! ```
//! use il3820::Color;
//!
//! assert_eq!(Color::Black.byte(), 0x00);
//! assert_eq!(Color::White.byte(), 0xFF);
//! assert_eq!(Color::White.inverse(), Color::Black);
//! ```

/// Colors supported by the IL3820
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Black pixels
    Black,
    /// White pixels
    #[default]
    White,
}

impl Color {
    /// Byte with all 8 pixels set to this color
    pub const fn byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }

    /// The other color
    pub const fn inverse(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl From<bool> for Color {
    /// `true` maps to a set (white) bit
    fn from(bit: bool) -> Self {
        if bit { Self::White } else { Self::Black }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bit() {
        assert_eq!(Color::from(true), Color::White);
        assert_eq!(Color::from(false), Color::Black);
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default().byte(), 0xFF);
    }
}
