// SPDX-License-Identifier: MIT
//
// swatch-color — color math for the swatch palette toolkit.
//
// Every operation here is a pure function over sRGB values in one of
// three encodings:
//
//   HEX (#RRGGBB) ↔ RGB (three 8-bit channels) ↔ HSL (degrees, percent, percent)
//
// The string-facing functions keep a fail-soft contract: malformed HEX
// input resolves to black instead of an error, so UI callers can feed
// raw text fields straight in. The typed values (`Hex`, `Rgb`, `Hsl`)
// exist for callers that want validation up front.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]
// Palette indices become hue offsets.
#![allow(clippy::cast_precision_loss)]
// Fused multiply-add shifts last-bit rounding near channel and luma thresholds.
#![allow(clippy::suboptimal_flops)]

pub mod contrast;
pub mod format;
pub mod hex;
pub mod random;
pub mod space;

pub use contrast::{contrast_color, luminance};
pub use format::{Rgb, hex_to_rgb, is_valid_hex, rgb_to_hex, rgb_values};
pub use hex::{Hex, ParseHexError};
pub use random::{DEFAULT_PALETTE_SIZE, generate_palette, random_color};
pub use space::{Hsl, complementary_color, hex_to_hsl, hsl_to_hex};
