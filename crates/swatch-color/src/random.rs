// SPDX-License-Identifier: MIT
//
// Random colors and evenly spaced random palettes.
//
// The plain functions draw from the thread-local generator; the `_with`
// variants take any `rand::Rng` so callers (and tests) can seed them.
// None of this is suitable for anything security-related.

use rand::Rng;

use crate::hex::Hex;
use crate::space::hsl_to_hex;

/// Palette length used when the caller has no preference.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Saturation band for generated palettes, in percent.
pub const PALETTE_SATURATION: (f64, f64) = (70.0, 90.0);

/// Lightness band for generated palettes, in percent.
pub const PALETTE_LIGHTNESS: (f64, f64) = (50.0, 65.0);

/// A uniformly random color over the full 24-bit range.
#[must_use]
pub fn random_color() -> Hex {
    random_color_with(&mut rand::thread_rng())
}

/// [`random_color`] with an explicit generator.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Hex {
    Hex::from_packed(rng.gen_range(0..=0x00FF_FFFF))
}

/// `count` colors spaced evenly around the hue wheel from a random base
/// hue, sharing one random saturation and one random lightness.
#[must_use]
pub fn generate_palette(count: usize) -> Vec<Hex> {
    generate_palette_with(&mut rand::thread_rng(), count)
}

/// [`generate_palette`] with an explicit generator.
pub fn generate_palette_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Hex> {
    let base_hue: f64 = rng.gen_range(0.0..360.0);
    let saturation = rng.gen_range(PALETTE_SATURATION.0..=PALETTE_SATURATION.1);
    let lightness = rng.gen_range(PALETTE_LIGHTNESS.0..=PALETTE_LIGHTNESS.1);
    let step = 360.0 / count as f64;

    (0..count)
        .map(|i| {
            let hue = (base_hue + i as f64 * step) % 360.0;
            hsl_to_hex(hue, saturation, lightness)
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::is_valid_hex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn random_color_is_valid() {
        let mut rng = seeded();
        for _ in 0..256 {
            let hex = random_color_with(&mut rng);
            assert!(is_valid_hex(hex.as_str()), "bad color {hex}");
        }
    }

    #[test]
    fn random_color_thread_rng() {
        assert!(is_valid_hex(random_color().as_str()));
    }

    #[test]
    fn random_color_deterministic_with_seed() {
        let a = random_color_with(&mut seeded());
        let b = random_color_with(&mut seeded());
        assert_eq!(a, b);
    }

    #[test]
    fn palette_has_requested_length() {
        let mut rng = seeded();
        for count in [1, 3, 5, 8, 12] {
            assert_eq!(generate_palette_with(&mut rng, count).len(), count);
        }
    }

    #[test]
    fn palette_zero_is_empty() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn palette_default_size_is_five() {
        assert_eq!(generate_palette(DEFAULT_PALETTE_SIZE).len(), 5);
    }

    #[test]
    fn palette_colors_are_distinct() {
        let mut rng = seeded();
        let colors = generate_palette_with(&mut rng, 5);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn palette_hues_evenly_spaced() {
        let mut rng = seeded();
        let colors = generate_palette_with(&mut rng, 4);
        let hues: Vec<f64> = colors.iter().map(|c| c.hsl().h).collect();
        for pair in hues.windows(2) {
            let gap = (pair[1] - pair[0]).rem_euclid(360.0);
            // 8-bit rounding moves the recovered hue by a degree or two.
            assert!((gap - 90.0).abs() < 3.0, "gap {gap} in {hues:?}");
        }
    }

    #[test]
    fn palette_stays_in_band() {
        let mut rng = seeded();
        for _ in 0..32 {
            let colors = generate_palette_with(&mut rng, 5);
            for c in &colors {
                let hsl = c.hsl();
                assert!((68.0..=92.0).contains(&hsl.s), "{c} saturation {}", hsl.s);
                assert!((49.0..=66.0).contains(&hsl.l), "{c} lightness {}", hsl.l);
            }
        }
    }
}
