//! # swatch-store — palette persistence over a key-value store
//!
//! Saves and restores the working palette and the pinned colors. The
//! backing store is injected through [`KeyValueStore`], so the same code
//! runs against an in-memory map in tests and a JSON file on disk in the
//! CLI.
//!
//! # Keys
//!
//! | Key            | Value                                               |
//! |----------------|-----------------------------------------------------|
//! | `colorPalette` | `{"colors": [...], "settings": {...}, "savedAt": "..."}` |
//! | `pinnedColors` | `["#RRGGBB", ...]`                                  |
//!
//! The two keys are written independently. There is no cross-key
//! consistency and no locking; concurrent writers must coordinate
//! themselves.
//!
//! # Failure policy
//!
//! Loads never fail: a missing key or unreadable value is logged and
//! turned into `None` / an empty list. Writes return [`StoreError`]
//! because a real backing store can refuse them.

mod error;
mod file;
mod kv;
mod palette;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use palette::{PALETTE_KEY, PINNED_KEY, PaletteStore, SavedPalette, Settings};
