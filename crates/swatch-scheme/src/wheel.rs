//! Hue-wheel arithmetic — pure functions from a base hue to related hues.
//!
//! The first hue of every multi-hue result is the (normalized) base hue.
//! All values are in `[0, 360)`.

use swatch_color::Hsl;

/// Default spread for [`analogous`], in degrees.
pub const DEFAULT_ANALOGOUS_OFFSET: f64 = 30.0;

/// Default saturation for [`monochromatic`], in percent.
pub const DEFAULT_MONOCHROMATIC_SATURATION: f64 = 70.0;

/// Lightness ladder of a monochromatic scheme, darkest first.
pub const MONOCHROMATIC_LIGHTNESS: [f64; 5] = [20.0, 35.0, 50.0, 65.0, 80.0];

/// Normalize a hue to [0, 360).
#[must_use]
pub fn norm(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// The opposite hue, 180° away.
#[must_use]
pub fn complementary(hue: f64) -> f64 {
    norm(hue + 180.0)
}

/// `[hue - offset, hue, hue + offset]`.
#[must_use]
pub fn analogous(hue: f64, offset: f64) -> [f64; 3] {
    [norm(hue - offset), norm(hue), norm(hue + offset)]
}

/// Three hues 120° apart.
#[must_use]
pub fn triadic(hue: f64) -> [f64; 3] {
    [norm(hue), norm(hue + 120.0), norm(hue + 240.0)]
}

/// Four hues 90° apart (a square on the wheel).
#[must_use]
pub fn tetradic(hue: f64) -> [f64; 4] {
    [norm(hue), norm(hue + 90.0), norm(hue + 180.0), norm(hue + 270.0)]
}

/// The base hue plus the two neighbors of its complement, ±30°.
#[must_use]
pub fn split_complementary(hue: f64) -> [f64; 3] {
    [norm(hue), norm(hue + 150.0), norm(hue + 210.0)]
}

/// Five shades of one hue at constant saturation, lightness from
/// [`MONOCHROMATIC_LIGHTNESS`].
#[must_use]
pub fn monochromatic(hue: f64, saturation: f64) -> [Hsl; 5] {
    let h = norm(hue);
    MONOCHROMATIC_LIGHTNESS.map(|l| Hsl::new(h, saturation, l))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
