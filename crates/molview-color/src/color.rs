//! Core color type

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};

/// An RGB color with 8-bit channels (no alpha)
///
/// The embedded rendering engine consumes colors either as `#RRGGBB` hex
/// strings or as big-endian 24-bit integers, so channels are kept in integer
/// space throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color from RGB bytes
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse a hex color literal (e.g. `"#FF0000"` or `"FF0000"`)
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };

        Ok(Color {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Pack into a big-endian 24-bit integer (`0xRRGGBB`)
    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Format as an uppercase `#RRGGBB` hex string
    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colors
    ///
    /// Fractional channel values are truncated, not rounded, so the midpoint
    /// of black and white is `#7F7F7F`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let channel = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)) as u8;
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Common colors
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
