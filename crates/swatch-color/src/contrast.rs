// SPDX-License-Identifier: MIT
//
// Luma and black-or-white text contrast.
//
// Luma is the Rec. 601 weighted sum over 8-bit channels, not CIE Y and
// not WCAG relative luminance. The contrast pick is a fixed midpoint
// split: anything brighter than 128 gets black text, the rest white.

use crate::format::rgb_values;
use crate::hex::Hex;

/// Luma above this value takes dark text.
pub const CONTRAST_THRESHOLD: f64 = 128.0;

/// Perceptual luma of a HEX color, `0.299r + 0.587g + 0.114b`, in [0, 255].
///
/// Malformed input reads as black and yields `0.0`.
#[must_use]
pub fn luminance(hex: &str) -> f64 {
    rgb_values(hex).luminance()
}

/// `#000000` for colors brighter than [`CONTRAST_THRESHOLD`], else `#FFFFFF`.
#[must_use]
pub fn contrast_color(hex: &str) -> Hex {
    if luminance(hex) > CONTRAST_THRESHOLD {
        Hex::black()
    } else {
        Hex::white()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
