// SPDX-License-Identifier: MIT
//
// HEX ⇄ HSL conversion.
//
// HSL here is the CSS cylinder: hue in degrees [0, 360), saturation and
// lightness in percent [0, 100]. Forward and inverse follow the usual
// chroma/sextant construction:
//
//   c = (1 - |2l - 1|) * s         chroma
//   x = c * (1 - |(h/60) mod 2 - 1|)  second-largest component
//   m = l - c/2                    offset added to every channel
//
// Rounding to 8-bit channels means HEX → HSL → HEX can drift by at most
// one unit per channel.

use crate::format::rgb_values;
use crate::hex::Hex;

/// A color in HSL: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle, 0.0 to 360.0 (exclusive).
    pub h: f64,
    /// Saturation, 0.0 to 100.0.
    pub s: f64,
    /// Lightness, 0.0 to 100.0.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[must_use]
    pub fn to_hex(self) -> Hex {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

/// Convert HSL to canonical `#RRGGBB`.
///
/// `h` selects one of six 60° sextants. A hue outside `[0, 360)`,
/// including exactly `360`, any negative angle and `NaN`, selects no
/// sextant: the pre-offset triple stays `(0, 0, 0)` and the result is the
/// gray `m`. Channels that land outside `[0, 255]` (out-of-range `s` or
/// `l`) saturate at the nearest bound; `NaN` channels become `0`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Hex {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Hex::from_rgb(crate::format::Rgb::new(
        to_channel(r + m),
        to_channel(g + m),
        to_channel(b + m),
    ))
}

/// Convert a HEX color to HSL.
///
/// Malformed input is read as black (see [`rgb_values`]) and yields
/// `Hsl { h: 0, s: 0, l: 0 }`. When two channels tie for the maximum the
/// first of red, green, blue wins the hue formula.
#[must_use]
// `max` is always one of r, g, b, so exact equality is the channel test.
#[allow(clippy::float_cmp)]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let rgb = rgb_values(hex);
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // Achromatic.
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s)
    };

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

/// Rotate a color 180° around the hue wheel, keeping saturation and
/// lightness.
#[must_use]
pub fn complementary_color(hex: &str) -> Hex {
    let hsl = hex_to_hsl(hex);
    hsl_to_hex((hsl.h + 180.0) % 360.0, hsl.s, hsl.l)
}

/// Scale a unit component to an 8-bit channel, rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Float-to-int `as` saturates and maps NaN to 0.
    (v * 255.0).round() as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── hsl_to_hex ──────────────────────────────────────────────────

    #[test]
    fn primaries() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000FF");
    }

    #[test]
    fn secondaries() {
        assert_eq!(hsl_to_hex(60.0, 100.0, 50.0), "#FFFF00");
        assert_eq!(hsl_to_hex(180.0, 100.0, 50.0), "#00FFFF");
        assert_eq!(hsl_to_hex(300.0, 100.0, 50.0), "#FF00FF");
    }

    #[test]
    fn grays_ignore_hue() {
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(200.0, 0.0, 50.0), "#808080");
    }

    #[test]
    fn hue_360_selects_no_sextant() {
        // c = 1, m = 0: only the offset survives, so the result is black.
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#000000");
    }

    #[test]
    fn negative_hue_selects_no_sextant() {
        // s = 50%, l = 50%: c = 0.5, m = 0.25 → 0.25 * 255 = 63.75 → 64.
        assert_eq!(hsl_to_hex(-30.0, 50.0, 50.0), "#404040");
    }

    #[test]
    fn nan_hue_selects_no_sextant() {
        assert_eq!(hsl_to_hex(f64::NAN, 100.0, 50.0), "#000000");
    }

    #[test]
    fn out_of_range_lightness_saturates() {
        assert_eq!(hsl_to_hex(0.0, 0.0, 150.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, 0.0, -20.0), "#000000");
    }

    #[test]
    fn coral_midtone() {
        // The classic #FF6B6B sits at h=0, s=100, l≈70.98.
        assert_eq!(hsl_to_hex(0.0, 100.0, 70.98), "#FF6B6B");
    }

    // ── hex_to_hsl ──────────────────────────────────────────────────

    #[test]
    fn hsl_of_primaries() {
        assert_eq!(hex_to_hsl("#FF0000"), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#00FF00"), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#0000FF"), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn hsl_of_gray_is_achromatic() {
        let hsl = hex_to_hsl("#808080");
        assert!(hsl.h.abs() < 1e-9);
        assert!(hsl.s.abs() < 1e-9);
        assert!(approx_eq(hsl.l, 50.196, 0.01), "l = {}", hsl.l);
    }

    #[test]
    fn hsl_red_max_with_blue_above_green_wraps() {
        // r is max, g < b: the +6 term keeps hue positive (magenta side).
        let hsl = hex_to_hsl("#FF0080");
        assert!(approx_eq(hsl.h, 329.88, 0.01), "h = {}", hsl.h);
    }

    #[test]
    fn hsl_tie_prefers_red() {
        // r == g == max: the red branch runs, (g - b)/d = 1 → 60°.
        let hsl = hex_to_hsl("#FFFF00");
        assert!(approx_eq(hsl.h, 60.0, 1e-9), "h = {}", hsl.h);
    }

    #[test]
    fn hsl_tie_green_blue_prefers_green() {
        let hsl = hex_to_hsl("#00FFFF");
        assert!(approx_eq(hsl.h, 180.0, 1e-9), "h = {}", hsl.h);
    }

    #[test]
    fn hsl_light_saturation_branch() {
        // l > 0.5 uses d / (2 - max - min).
        let hsl = hex_to_hsl("#FF6B6B");
        assert!(approx_eq(hsl.s, 100.0, 1e-9), "s = {}", hsl.s);
        assert!(approx_eq(hsl.l, 70.98, 0.01), "l = {}", hsl.l);
    }

    #[test]
    fn hsl_of_malformed_is_black() {
        assert_eq!(hex_to_hsl("not a color"), Hsl::default());
    }

    #[test]
    fn hex_hsl_hex_roundtrip_known() {
        for hex in ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#123456"] {
            assert_eq!(hex_to_hsl(hex).to_hex(), hex);
        }
    }

    // ── complementary_color ─────────────────────────────────────────

    #[test]
    fn complementary_of_red_is_cyan() {
        assert_eq!(complementary_color("#FF0000"), "#00FFFF");
    }

    #[test]
    fn complementary_of_blue_is_yellow() {
        assert_eq!(complementary_color("#0000FF"), "#FFFF00");
    }

    #[test]
    fn complementary_of_gray_is_itself() {
        assert_eq!(complementary_color("#808080"), "#808080");
    }
}
