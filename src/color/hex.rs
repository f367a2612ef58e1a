use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{BackdropError, BackdropResult};

/// An opaque sRGB color, written as `#RRGGBB`.
///
/// Construction always goes through validation, so every `Color` that reaches a template has
/// three well-formed channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` literal.
    pub const fn from_u24(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse `#RRGGBB` (case-insensitive). Short forms and alpha are rejected.
    pub fn from_hex(s: &str) -> BackdropResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').ok_or_else(|| {
            BackdropError::validation(format!("color \"{s}\" must start with '#'"))
        })?;
        Self::from_hex_digits(digits).map_err(|msg| {
            BackdropError::validation(format!("invalid color \"{s}\": {msg}"))
        })
    }

    /// Parse the six hex digits of a color without its leading `#`, as used in share links.
    pub fn from_bare_hex(digits: &str) -> BackdropResult<Self> {
        let digits = digits.trim();
        Self::from_hex_digits(digits).map_err(|msg| {
            BackdropError::validation(format!("invalid color \"{digits}\": {msg}"))
        })
    }

    fn from_hex_digits(digits: &str) -> Result<Self, String> {
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("expected exactly 6 hex digits".to_owned());
        }

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{}", self.to_bare_hex())
    }

    /// Lowercase `rrggbb`, without the leading `#`.
    pub fn to_bare_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Channels scaled to `[0, 1]`.
    pub fn to_unit_rgb(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a list of `#RRGGBB` strings, failing on the first malformed entry.
pub fn parse_colors<S: AsRef<str>>(items: &[S]) -> BackdropResult<Vec<Color>> {
    items.iter().map(|s| Color::from_hex(s.as_ref())).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
