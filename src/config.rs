// SPDX-License-Identifier: MIT
//
// Runtime configuration for the swatch CLI.
//
// Sources, lowest priority first:
//
//   built-in defaults → SWATCH_STORE / SWATCH_LOG environment → leading flags
//
// Only `--store` is a flag; the log filter comes from the environment so
// it is in place before argument parsing can fail.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the JSON store file.
pub const STORE_ENV: &str = "SWATCH_STORE";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SWATCH_LOG";

/// Store file used when neither the environment nor a flag names one.
pub const DEFAULT_STORE: &str = ".swatch.json";

/// Log filter used when `SWATCH_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON key-value store.
    pub store_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable.
    /// Empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v: &String| !v.is_empty());
        let mut config = Self::default();
        if let Some(path) = var(STORE_ENV) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(filter) = var(LOG_ENV) {
            config.log_filter = filter;
        }
        config
    }

    /// Consume leading `--store <path>` / `--store=<path>` flags and
    /// return the remaining arguments. The last flag wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] if `--store` is the last
    /// argument.
    pub fn apply_flags<'a>(&mut self, mut args: &'a [String]) -> Result<&'a [String], ConfigError> {
        loop {
            match args {
                [flag, rest @ ..] if flag == "--store" => {
                    let [path, rest @ ..] = rest else {
                        return Err(ConfigError::MissingValue("--store"));
                    };
                    self.store_path = PathBuf::from(path);
                    args = rest;
                }
                [flag, rest @ ..] if flag.starts_with("--store=") => {
                    self.store_path = PathBuf::from(&flag["--store=".len()..]);
                    args = rest;
                }
                _ => return Ok(args),
            }
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
