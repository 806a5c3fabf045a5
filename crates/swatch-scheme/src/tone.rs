//! Hue classification — warm/cold tone and coarse hue names.

use std::fmt;

/// Temperature of a hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Reds, oranges, pinks: `[0, 60)` and `[300, 360)`.
    Warm,
    /// Cyans, blues, violets: `[180, 300)`.
    Cold,
    /// Yellows and greens: `[60, 180)`.
    Neutral,
}

impl Tone {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a hue in degrees.
///
/// Hues are compared as given, so callers should pass values in
/// `[0, 360)`. Anything at or past 300 counts as warm.
#[must_use]
pub fn color_tone(hue: f64) -> Tone {
    if hue < 60.0 || hue >= 300.0 {
        Tone::Warm
    } else if (180.0..300.0).contains(&hue) {
        Tone::Cold
    } else {
        Tone::Neutral
    }
}

/// Ten hue names, one per 36° sector starting at red.
pub const HUE_NAMES: [&str; 10] = [
    "Red",
    "Orange",
    "Yellow",
    "Yellow-green",
    "Green",
    "Cyan",
    "Blue",
    "Violet",
    "Purple",
    "Pink",
];

/// Name of the 36° sector nearest to `hue`.
///
/// The sector index is `round(hue / 36) mod 10`, so a hue snaps to the
/// closest sector center: 17° is still red, 19° is already orange, and
/// everything from 342° wraps back to red.
#[must_use]
pub fn hue_name(hue: f64) -> &'static str {
    // `as` saturates out-of-range values and maps NaN to 0.
    let sector = (hue / 36.0).round() as i64;
    HUE_NAMES[sector.rem_euclid(10) as usize]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tone_boundaries() {
        assert_eq!(color_tone(0.0), Tone::Warm);
        assert_eq!(color_tone(59.9), Tone::Warm);
        assert_eq!(color_tone(60.0), Tone::Neutral);
        assert_eq!(color_tone(179.9), Tone::Neutral);
        assert_eq!(color_tone(180.0), Tone::Cold);
        assert_eq!(color_tone(299.9), Tone::Cold);
        assert_eq!(color_tone(300.0), Tone::Warm);
        assert_eq!(color_tone(359.9), Tone::Warm);
    }

    #[test]
    fn tone_display() {
        assert_eq!(Tone::Cold.to_string(), "cold");
    }

    #[test]
    fn hue_name_sector_centers() {
        for (i, name) in HUE_NAMES.iter().enumerate() {
            assert_eq!(hue_name(i as f64 * 36.0), *name);
        }
    }

    #[test]
    fn hue_name_snaps_to_nearest() {
        assert_eq!(hue_name(17.0), "Red");
        assert_eq!(hue_name(19.0), "Orange");
        assert_eq!(hue_name(341.0), "Pink");
        assert_eq!(hue_name(343.0), "Red");
    }

    #[test]
    fn hue_name_wraps_at_360() {
        assert_eq!(hue_name(360.0), hue_name(0.0));
        assert_eq!(hue_name(0.0), "Red");
    }

    #[test]
    fn hue_name_negative_wraps() {
        assert_eq!(hue_name(-36.0), "Pink");
    }
}
