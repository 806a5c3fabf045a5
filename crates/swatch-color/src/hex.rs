// SPDX-License-Identifier: MIT
//
// The validated HEX color type.
//
// `Hex` always holds canonical `#RRGGBB` with uppercase digits, so two
// values compare equal exactly when they name the same sRGB color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::format::{Rgb, is_valid_hex, rgb_values};
use crate::space::{Hsl, hex_to_hsl};

/// A validated sRGB color in `#RRGGBB` form.
///
/// # Examples
///
/// ```
/// use swatch_color::Hex;
///
/// let coral: Hex = "#ff6b6b".parse().unwrap();
/// assert_eq!(coral.as_str(), "#FF6B6B");
/// assert_eq!(coral.rgb().to_string(), "rgb(255, 107, 107)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex(String);

/// Returned when a string is not `#` followed by six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid HEX color {input:?}: expected #RRGGBB")]
pub struct ParseHexError {
    pub input: String,
}

impl Hex {
    /// Validate and canonicalize. `None` unless `s` matches `#RRGGBB`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        is_valid_hex(s).then(|| Self(s.to_ascii_uppercase()))
    }

    /// `#000000`.
    #[must_use]
    pub fn black() -> Self {
        Rgb::BLACK.to_hex()
    }

    /// `#FFFFFF`.
    #[must_use]
    pub fn white() -> Self {
        Rgb::WHITE.to_hex()
    }

    pub(crate) fn from_rgb(rgb: Rgb) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub(crate) fn from_packed(value: u32) -> Self {
        Self(format!("#{:06X}", value & 0x00FF_FFFF))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn rgb(&self) -> Rgb {
        rgb_values(&self.0)
    }

    #[must_use]
    pub fn hsl(&self) -> Hsl {
        hex_to_hsl(&self.0)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Hex {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseHexError { input: s.to_owned() })
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.0
    }
}

impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl PartialEq<str> for Hex {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Hex {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_uppercases() {
        let hex = Hex::parse("#4ecdc4").unwrap();
        assert_eq!(hex.as_str(), "#4ECDC4");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Hex::parse("4ECDC4"), None);
        assert_eq!(Hex::parse("#4ECDC"), None);
        assert_eq!(Hex::parse("#GGGGGG"), None);
    }

    #[test]
    fn from_str_reports_input() {
        let err = "#nope".parse::<Hex>().unwrap_err();
        assert_eq!(err.input, "#nope");
        assert_eq!(err.to_string(), "invalid HEX color \"#nope\": expected #RRGGBB");
    }

    #[test]
    fn packed_is_zero_padded() {
        assert_eq!(Hex::from_packed(0x0000_00FF), "#0000FF");
        assert_eq!(Hex::from_packed(0xFF12_3456), "#123456");
    }

    #[test]
    fn black_and_white() {
        assert_eq!(Hex::black(), "#000000");
        assert_eq!(Hex::white(), "#FFFFFF");
    }

    #[test]
    fn serde_as_plain_string() {
        let hex = Hex::parse("#ff6b6b").unwrap();
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, "\"#FF6B6B\"");
        let back: Hex = serde_json::from_str("\"#ff6b6b\"").unwrap();
        assert_eq!(back, hex);
    }

    #[test]
    fn serde_rejects_malformed() {
        assert!(serde_json::from_str::<Hex>("\"red\"").is_err());
    }
}
