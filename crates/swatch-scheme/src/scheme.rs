//! Scheme kinds — string-keyed dispatch over the wheel functions.
//!
//! Scheme keys are the camelCase identifiers stored in saved palette
//! settings (`"splitComplementary"`, not `"split-complementary"`), and
//! matching is exact. Any key that is not recognized resolves to the
//! complementary scheme rather than an error.

use std::fmt;

use swatch_color::{Hex, hex_to_hsl};

use crate::wheel::{
    DEFAULT_ANALOGOUS_OFFSET, analogous, complementary, monochromatic, split_complementary,
    tetradic, triadic,
};

/// The kind of hue-wheel scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeKind {
    /// Base hue and its opposite (2 hues).
    #[default]
    Complementary,
    /// Base hue ±30° (3 hues).
    Analogous,
    /// 120° spacing (3 hues).
    Triadic,
    /// 90° spacing (4 hues).
    Tetradic,
    /// Base hue plus complement ±30° (3 hues).
    SplitComplementary,
    /// One hue, five lightness steps.
    Monochromatic,
}

impl SchemeKind {
    /// Stored identifier of this scheme.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "splitComplementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Human-readable name for menus and labels.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::SplitComplementary => "Split-complementary",
            Self::Monochromatic => "Monochromatic",
        }
    }

    /// Look up a scheme by its exact key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().find(|k| k.key() == key).copied()
    }

    /// Look up a scheme by key, falling back to [`SchemeKind::Complementary`].
    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    /// All scheme kinds, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary, Self::Analogous, Self::Triadic,
            Self::Tetradic, Self::SplitComplementary, Self::Monochromatic,
        ]
    }

    /// Hues of this scheme around `hue`. The first element is the base.
    ///
    /// A monochromatic scheme varies lightness, not hue, so it has no hue
    /// set of its own and yields the complementary pair here. Use
    /// [`monochromatic`] or [`scheme_colors`] for its shades.
    #[must_use]
    pub fn hues(self, hue: f64) -> Vec<f64> {
        match self {
            Self::Analogous => analogous(hue, DEFAULT_ANALOGOUS_OFFSET).to_vec(),
            Self::Triadic => triadic(hue).to_vec(),
            Self::Tetradic => tetradic(hue).to_vec(),
            Self::SplitComplementary => split_complementary(hue).to_vec(),
            Self::Complementary | Self::Monochromatic => {
                vec![crate::wheel::norm(hue), complementary(hue)]
            }
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Hues of the scheme named `scheme_type` around `hue`.
///
/// Unknown keys, like `"complementary"`, produce `[hue, hue + 180]`.
#[must_use]
pub fn color_scheme(hue: f64, scheme_type: &str) -> Vec<f64> {
    SchemeKind::from_key_or_default(scheme_type).hues(hue)
}

/// Display name for a scheme key. Unknown keys are returned unchanged.
#[must_use]
pub fn scheme_type_name(scheme_type: &str) -> &str {
    SchemeKind::from_key(scheme_type).map_or(scheme_type, |kind| kind.display_name())
}

/// Resolve a scheme to concrete colors around `hex`.
///
/// Hue schemes keep the source color's saturation and lightness and vary
/// only the hue. A monochromatic scheme keeps hue and saturation and
/// walks the lightness ladder instead.
#[must_use]
pub fn scheme_colors(hex: &str, kind: SchemeKind) -> Vec<Hex> {
    let base = hex_to_hsl(hex);
    match kind {
        SchemeKind::Monochromatic => monochromatic(base.h, base.s)
            .iter()
            .map(|shade| shade.to_hex())
            .collect(),
        _ => kind
            .hues(base.h)
            .into_iter()
            .map(|h| swatch_color::hsl_to_hex(h, base.s, base.l))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
