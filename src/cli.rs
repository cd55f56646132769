// SPDX-License-Identifier: MIT
//
// Command-line surface. Every generation knob is optional here; whatever is
// given overrides the config file, which overrides the preset.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lumen_color::Color;

use crate::config::PaletteConfig;

/// Derive a complete terminal palette from a background (and optional
/// foreground) color in a perceptual L,a,b space.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
pub struct Args {
    /// Start from a builtin preset (see --list-presets)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// TOML config file with generation parameters
    #[arg(short, long, env = "LUMEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Background anchor as L,a,b
    #[arg(short, long, value_parser = parse_color, allow_hyphen_values = true)]
    pub background: Option<Color>,

    /// Foreground anchor as L,a,b (derived from the background if omitted)
    #[arg(short = 'F', long, value_parser = parse_color, allow_hyphen_values = true)]
    pub foreground: Option<Color>,

    /// Chroma multiplier applied to every role
    #[arg(short, long, allow_negative_numbers = true)]
    pub saturation: Option<f64>,

    /// Move accents this much further from the foreground
    #[arg(long, allow_negative_numbers = true)]
    pub accent_offset: Option<f64>,

    /// Lightness spread between accents (derived if omitted or 0)
    #[arg(long = "accent-spread", allow_negative_numbers = true)]
    pub accent_l_spread: Option<f64>,

    /// Bright-accent lightness shift (derived if omitted or 0)
    #[arg(long = "bright-shift", allow_negative_numbers = true)]
    pub br_accent_shift: Option<f64>,

    /// Extra chroma for the bright background roles
    #[arg(long = "bg-extra-saturation", allow_negative_numbers = true)]
    pub br_bg_extra_saturation: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write the palette to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log contrast and distance diagnostics to stderr
    #[arg(short, long)]
    pub report: bool,

    /// List builtin presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Toml,
    Text,
}

impl Args {
    /// The generation knobs given on the command line, as a config layer.
    #[must_use]
    pub fn overrides(&self) -> PaletteConfig {
        PaletteConfig {
            preset: self.preset.clone(),
            background: self.background,
            foreground: self.foreground,
            saturation: self.saturation,
            accent_offset: self.accent_offset,
            accent_l_spread: self.accent_l_spread,
            br_accent_shift: self.br_accent_shift,
            br_bg_extra_saturation: self.br_bg_extra_saturation,
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::parse(s).ok_or_else(|| format!("expected L,a,b (three numbers), got {s:?}"))
}
