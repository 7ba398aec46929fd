use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// RGBA color parsed from a hex string.
///
/// Serializes as `#rrggbb` (or `#rrggbbaa` when the alpha channel is not
/// opaque) and deserializes from any of the accepted hex spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA`. Case-insensitive, and the
    /// leading `#` is optional.
    pub fn parse(s: &str) -> Result<Self, EditError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EditError::InvalidInput(format!("invalid color: {s}")));
        }
        match hex.len() {
            3 => {
                let nibble = |i: usize| -> Result<u8, EditError> {
                    let v = u8::from_str_radix(&hex[i..i + 1], 16)
                        .map_err(|_| EditError::InvalidInput(format!("invalid color: {s}")))?;
                    Ok(v * 17)
                };
                Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 | 8 => {
                let pair = |i: usize| -> Result<u8, EditError> {
                    u8::from_str_radix(&hex[i..i + 2], 16)
                        .map_err(|_| EditError::InvalidInput(format!("invalid color: {s}")))
                };
                let a = if hex.len() == 8 { pair(6)? } else { 255 };
                Ok(Color::rgba(pair(0)?, pair(2)?, pair(4)?, a))
            }
            _ => Err(EditError::InvalidInput(format!("invalid color: {s}"))),
        }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = EditError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        if c.a == 255 {
            format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digits() {
        assert_eq!(Color::parse("#ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(Color::parse("#FF8000").unwrap(), Color::rgb(255, 128, 0));
    }

    #[test]
    fn test_parse_short_and_alpha() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#f00").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(
            Color::parse("#11223344").unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#ff").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("white").is_err());
        assert!(Color::parse("#fffffff").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let c: Color = serde_json::from_str("\"#ff8000\"").unwrap();
        assert_eq!(c, Color::rgb(255, 128, 0));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff8000\"");
    }
}
