// SPDX-License-Identifier: MIT
//
// swatch — a color palette toolkit for the terminal.
//
// This is the binary that wires together the library crates:
//
//   swatch-color  → HEX/RGB/HSL conversion, luminance, random palettes
//   swatch-scheme → hue-wheel schemes, tone, hue names
//   swatch-store  → saved palette and pinned colors
//
// Each invocation flows through:
//
//   env + flags → Config → Command::parse → run → stdout
//
// The store is a JSON file (see `config.rs`) read and written on demand;
// nothing is kept between invocations except what lands in that file.

mod config;

use std::env;
use std::io::{self, Write};
use std::process;

use swatch_color::{Hex, ParseHexError, contrast_color, generate_palette, random_color};
use swatch_scheme::{SchemeKind, color_tone, hue_name, scheme_colors};
use swatch_store::{FileStore, KeyValueStore, PaletteStore, Settings, StoreError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError, DEFAULT_LOG_FILTER};

const USAGE: &str = "\
usage: swatch [--store <path>] <command> [args]

commands:
  random                 print one random color
  palette [count]        generate an evenly spaced palette (default 5)
  scheme <hex> [kind]    colors of a scheme around <hex>
                         kinds: complementary analogous triadic tetradic
                                splitComplementary monochromatic
  info <hex>             conversions and properties of one color
  save <hex>...          save a palette
  load                   print the saved palette
  clear                  delete the saved palette
  pin <hex>...           add colors to the pinned list
  unpin <hex>...         remove colors from the pinned list
  pinned                 print the pinned colors
  help                   show this message

environment:
  SWATCH_STORE           store file (default .swatch.json)
  SWATCH_LOG             log filter (default warn)";

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hex(#[from] ParseHexError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

// ─── Commands ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Random,
    Palette { count: usize },
    Scheme { base: Hex, kind: SchemeKind },
    Info { color: Hex },
    Save { colors: Vec<Hex> },
    Load,
    Clear,
    Pin { colors: Vec<Hex> },
    Unpin { colors: Vec<Hex> },
    Pinned,
    Help,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, CliError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Self::Help);
        };

        let command = match name.as_str() {
            "random" => Self::Random,
            "palette" => {
                let count = match rest.first() {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| CliError::Usage(format!("invalid palette size {raw:?}")))?,
                    None => swatch_color::DEFAULT_PALETTE_SIZE,
                };
                Self::Palette { count }
            }
            "scheme" => {
                let base = required_hex(rest, "scheme")?;
                let kind = rest
                    .get(1)
                    .map_or_else(SchemeKind::default, |key| SchemeKind::from_key_or_default(key));
                Self::Scheme { base, kind }
            }
            "info" => Self::Info { color: required_hex(rest, "info")? },
            "save" => Self::Save { colors: hex_list(rest, "save")? },
            "load" => Self::Load,
            "clear" => Self::Clear,
            "pin" => Self::Pin { colors: hex_list(rest, "pin")? },
            "unpin" => Self::Unpin { colors: hex_list(rest, "unpin")? },
            "pinned" => Self::Pinned,
            "help" | "-h" | "--help" => Self::Help,
            other => return Err(CliError::Usage(format!("unknown command {other:?}"))),
        };
        Ok(command)
    }
}

fn required_hex(args: &[String], command: &str) -> Result<Hex, CliError> {
    let raw = args
        .first()
        .ok_or_else(|| CliError::Usage(format!("{command} needs a color")))?;
    Ok(raw.parse::<Hex>()?)
}

fn hex_list(args: &[String], command: &str) -> Result<Vec<Hex>, CliError> {
    if args.is_empty() {
        return Err(CliError::Usage(format!("{command} needs at least one color")));
    }
    args.iter()
        .map(|raw| raw.parse::<Hex>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::from)
}

/// One-line summary: HEX, RGB, hue name and tone.
fn describe(color: &Hex) -> String {
    let hsl = color.hsl();
    format!(
        "{color}  {:<18}  {:<12}  {}",
        color.rgb().to_string(),
        hue_name(hsl.h),
        color_tone(hsl.h)
    )
}

fn run<S: KeyValueStore>(
    command: &Command,
    store: &mut PaletteStore<S>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Random => writeln!(out, "{}", describe(&random_color()))?,
        Command::Palette { count } => {
            for color in generate_palette(*count) {
                writeln!(out, "{}", describe(&color))?;
            }
        }
        Command::Scheme { base, kind } => {
            writeln!(out, "{kind} scheme of {base}")?;
            for color in scheme_colors(base.as_str(), *kind) {
                writeln!(out, "{}", describe(&color))?;
            }
        }
        Command::Info { color } => {
            let hsl = color.hsl();
            writeln!(out, "hex          {color}")?;
            writeln!(out, "rgb          {}", color.rgb())?;
            writeln!(out, "hsl          hsl({:.0}, {:.0}%, {:.0}%)", hsl.h, hsl.s, hsl.l)?;
            writeln!(out, "luminance    {:.1}", color.rgb().luminance())?;
            writeln!(out, "text         {}", contrast_color(color.as_str()))?;
            writeln!(out, "name         {}", hue_name(hsl.h))?;
            writeln!(out, "tone         {}", color_tone(hsl.h))?;
            writeln!(out, "complement   {}", swatch_color::complementary_color(color.as_str()))?;
        }
        Command::Save { colors } => {
            let mut settings = Settings::new();
            settings.insert("count".into(), colors.len().into());
            settings.insert("format".into(), "hex".into());
            store.save_palette(colors, settings)?;
            writeln!(out, "Saved {} colors.", colors.len())?;
        }
        Command::Load => match store.load_palette() {
            Some(saved) => {
                writeln!(out, "Saved at {}", saved.saved_at)?;
                for color in &saved.colors {
                    writeln!(out, "{}", describe(color))?;
                }
            }
            None => writeln!(out, "No saved palette.")?,
        },
        Command::Clear => {
            store.clear_palette()?;
            writeln!(out, "Cleared saved palette.")?;
        }
        Command::Pin { colors } => {
            let mut pinned = store.load_pinned_colors();
            for color in colors {
                if !pinned.contains(color) {
                    pinned.push(color.clone());
                }
            }
            store.save_pinned_colors(&pinned)?;
            writeln!(out, "{} pinned.", pinned.len())?;
        }
        Command::Unpin { colors } => {
            let mut pinned = store.load_pinned_colors();
            pinned.retain(|c| !colors.contains(c));
            store.save_pinned_colors(&pinned)?;
            writeln!(out, "{} pinned.", pinned.len())?;
        }
        Command::Pinned => {
            let pinned = store.load_pinned_colors();
            if pinned.is_empty() {
                writeln!(out, "No pinned colors.")?;
            }
            for color in &pinned {
                writeln!(out, "{}", describe(color))?;
            }
        }
        Command::Help => writeln!(out, "{USAGE}")?,
    }
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = Config::from_env();
    init_logging(&config.log_filter);

    let command = config
        .apply_flags(&args)
        .map_err(CliError::from)
        .and_then(Command::parse)
        .unwrap_or_else(|e| {
            eprintln!("swatch: {e}");
            process::exit(2);
        });

    tracing::debug!(store = %config.store_path.display(), ?command, "Starting");
    let mut store = PaletteStore::new(FileStore::new(&config.store_path));
    let mut out = io::stdout().lock();

    if let Err(e) = run(&command, &mut store, &mut out) {
        eprintln!("swatch: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
