//! # swatch-scheme — hue-wheel color schemes
//!
//! Derives related hues from a base hue by fixed angular offsets, names
//! and classifies hues, and resolves schemes back to concrete colors.
//!
//! # Architecture
//!
//! ```text
//! base hue (degrees)
//!     │
//!     ▼
//! wheel.rs:  pure hue arithmetic (complementary, triadic, ...)
//!     │
//!     ▼
//! scheme.rs: SchemeKind dispatch, display names, HEX resolution
//!     │
//!     ▼
//! tone.rs:   warm/cold/neutral tone and hue names
//! ```
//!
//! Every hue returned by this crate is reduced into `[0, 360)`.

// Hue offsets and table indices cross between floats and integers.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod scheme;
pub mod tone;
pub mod wheel;

pub use scheme::{SchemeKind, color_scheme, scheme_colors, scheme_type_name};
pub use tone::{Tone, color_tone, hue_name};
