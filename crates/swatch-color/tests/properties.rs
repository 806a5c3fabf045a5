// SPDX-License-Identifier: MIT
//
// Property tests for the HEX ⇄ RGB ⇄ HSL conversions.

use proptest::prelude::*;
use swatch_color::{Hex, hex_to_hsl, hsl_to_hex, is_valid_hex, rgb_to_hex, rgb_values};

/// Any 24-bit color as `#RRGGBB`, in random letter case.
fn hex_string() -> impl Strategy<Value = String> {
    (0u32..=0x00FF_FFFF, any::<bool>()).prop_map(|(v, lower)| {
        let s = format!("#{v:06X}");
        if lower { s.to_ascii_lowercase() } else { s }
    })
}

fn channel_gap(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

proptest! {
    #[test]
    fn rgb_roundtrip_is_exact(hex in hex_string()) {
        let rgb = rgb_values(&hex);
        let back = rgb_to_hex(rgb.r, rgb.g, rgb.b);
        prop_assert_eq!(back.as_str(), hex.to_ascii_uppercase());
    }

    #[test]
    fn hsl_roundtrip_within_one_unit(hex in hex_string()) {
        let back = hex_to_hsl(&hex).to_hex();
        let a = rgb_values(&hex);
        let b = back.rgb();
        prop_assert!(channel_gap(a.r, b.r) <= 1, "{} -> {}", hex, back);
        prop_assert!(channel_gap(a.g, b.g) <= 1, "{} -> {}", hex, back);
        prop_assert!(channel_gap(a.b, b.b) <= 1, "{} -> {}", hex, back);
    }

    #[test]
    fn hsl_components_in_range(hex in hex_string()) {
        let hsl = hex_to_hsl(&hex);
        prop_assert!((0.0..360.0).contains(&hsl.h), "h = {}", hsl.h);
        prop_assert!((0.0..=100.0).contains(&hsl.s), "s = {}", hsl.s);
        prop_assert!((0.0..=100.0).contains(&hsl.l), "l = {}", hsl.l);
    }

    #[test]
    fn hsl_to_hex_always_valid(h in -720.0f64..720.0, s in -50.0f64..150.0, l in -50.0f64..150.0) {
        let hex = hsl_to_hex(h, s, l);
        prop_assert!(is_valid_hex(hex.as_str()), "{}", hex);
    }

    #[test]
    fn parse_accepts_exactly_valid(s in "#?[0-9A-Za-z]{0,8}") {
        prop_assert_eq!(Hex::parse(&s).is_some(), is_valid_hex(&s));
    }
}
