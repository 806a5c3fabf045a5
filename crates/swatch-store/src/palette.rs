//! Palette and pinned-color records on top of a [`KeyValueStore`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use swatch_color::Hex;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Key of the saved palette record.
pub const PALETTE_KEY: &str = "colorPalette";

/// Key of the pinned-colors list.
pub const PINNED_KEY: &str = "pinnedColors";

/// Free-form palette settings (color count, output format, scheme, ...).
pub type Settings = serde_json::Map<String, serde_json::Value>;

/// A palette as it is stored under [`PALETTE_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    /// Colors in display order.
    pub colors: Vec<Hex>,

    /// Settings captured alongside the colors.
    #[serde(default)]
    pub settings: Settings,

    /// When the palette was saved, ISO-8601 UTC (`2026-10-14T12:30:00.000Z`).
    #[serde(default)]
    pub saved_at: String,
}

impl SavedPalette {
    /// Parse the `saved_at` timestamp.
    #[must_use]
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.saved_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Palette persistence over an injected store.
///
/// Each save overwrites its key wholesale; there are no incremental
/// updates.
#[derive(Debug)]
pub struct PaletteStore<S> {
    store: S,
}

impl<S: KeyValueStore> PaletteStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Save `colors` and `settings`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written to the store.
    pub fn save_palette(&mut self, colors: &[Hex], settings: Settings) -> Result<()> {
        self.save_palette_at(colors, settings, Utc::now())
    }

    /// Save `colors` and `settings` with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written to the store.
    pub fn save_palette_at(
        &mut self,
        colors: &[Hex],
        settings: Settings,
        saved_at: DateTime<Utc>,
    ) -> Result<()> {
        let record = SavedPalette {
            colors: colors.to_vec(),
            settings,
            saved_at: saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.save(PALETTE_KEY, &record)?;
        tracing::debug!(colors = colors.len(), "Saved palette");
        Ok(())
    }

    /// The saved palette, or `None` if nothing is saved or the stored
    /// record cannot be read.
    #[must_use]
    pub fn load_palette(&self) -> Option<SavedPalette> {
        self.load(PALETTE_KEY)
    }

    /// Delete the saved palette. Pinned colors are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store refuses the removal.
    pub fn clear_palette(&mut self) -> Result<()> {
        self.store.remove(PALETTE_KEY)?;
        tracing::debug!("Cleared palette");
        Ok(())
    }

    /// Replace the pinned colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written to the store.
    pub fn save_pinned_colors(&mut self, colors: &[Hex]) -> Result<()> {
        self.save(PINNED_KEY, colors)?;
        tracing::debug!(colors = colors.len(), "Saved pinned colors");
        Ok(())
    }

    /// The pinned colors, or an empty list if none are saved or the
    /// stored list cannot be read.
    #[must_use]
    pub fn load_pinned_colors(&self) -> Vec<Hex> {
        self.load(PINNED_KEY).unwrap_or_default()
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
        let json =
            serde_json::to_string(value).map_err(|e| StoreError::Serialize { key, source: e })?;
        self.store.set(key, json)
    }

    fn load<T: DeserializeOwned>(&self, key: &'static str) -> Option<T> {
        let data = match self.store.get(key) {
            Ok(Some(data)) if !data.is_empty() => data,
            Ok(_) => return None,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read from store");
                return None;
            }
        };

        match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to parse stored value");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
