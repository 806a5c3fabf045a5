// SPDX-License-Identifier: MIT
//
// HEX ⇄ RGB conversion and HEX validation.
//
// Two flavors of parsing live side by side:
//
//   hex_to_rgb  - positional, unvalidated. Bad pairs show up as `NaN` in
//                 the formatted string, mirroring what a browser prints.
//   rgb_values  - validated. Anything that is not `#RRGGBB` becomes black.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::hex::Hex;

/// `#` followed by exactly six hex digits, any case.
static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#[0-9A-F]{6}$").expect("HEX pattern compiles"));

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color as three 8-bit channels.
///
/// `Display` renders the CSS functional form, `rgb(255, 107, 107)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, the fallback for unparseable input.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as canonical uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> Hex {
        Hex::from_rgb(self)
    }

    /// Perceptual luma, `0.299r + 0.587g + 0.114b`, in [0, 255].
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── String API ──────────────────────────────────────────────────────────────

/// Format the three positional hex pairs of `hex` as `rgb(r, g, b)`.
///
/// No validation happens: the pairs at offsets 1-2, 3-4 and 5-6 are read
/// as base-16 bytes whatever surrounds them. A pair that is missing or not
/// hexadecimal is rendered as `NaN`.
///
/// ```
/// use swatch_color::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#FF6B6B"), "rgb(255, 107, 107)");
/// assert_eq!(hex_to_rgb("#FF"), "rgb(255, NaN, NaN)");
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> String {
    let [r, g, b] =
        [1, 3, 5].map(|at| channel_at(hex, at).map_or_else(|| "NaN".to_owned(), |v| v.to_string()));
    format!("rgb({r}, {g}, {b})")
}

/// Encode three channels as uppercase, zero-padded `#RRGGBB`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> Hex {
    Rgb::new(r, g, b).to_hex()
}

/// Parse a validated HEX color into channels.
///
/// Returns [`Rgb::BLACK`] for anything that fails [`is_valid_hex`],
/// including the empty string. Never panics.
#[must_use]
pub fn rgb_values(hex: &str) -> Rgb {
    if !is_valid_hex(hex) {
        return Rgb::BLACK;
    }
    // Validated above, so every pair parses.
    let [r, g, b] = [1, 3, 5].map(|at| channel_at(hex, at).unwrap_or(0));
    Rgb::new(r, g, b)
}

/// Whether `hex` is `#` followed by exactly six hex digits (any case).
#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    HEX_PATTERN.is_match(hex)
}

#[inline]
fn channel_at(hex: &str, at: usize) -> Option<u8> {
    hex.get(at..at + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
