use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An opaque RGB color, written as `#rrggbb` (or `#rgb`) in style files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(text: &str) -> Result<Color, Error> {
        let invalid = || Error::Style(format!("invalid color `{text}`, expected #rrggbb"));
        let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::parse("#ff6868").unwrap(), Color::rgb(0xff, 0x68, 0x68));
        assert_eq!(Color::parse("#fa0").unwrap(), Color::rgb(0xff, 0xaa, 0x00));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["ff6868", "#ff686", "#gg0000", "", "#"] {
            assert!(Color::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn displays_as_lower_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }
}
