// SPDX-License-Identifier: MIT
//
// Config layering: preset → TOML file → command-line flags. Each layer is a
// PaletteConfig with every field optional; later layers win field by field.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lumen_color::Color;
use lumen_palette::{Foreground, GenerationParameters, require_preset};
use serde::Deserialize;

/// Preset used when no layer names a preset or a background.
pub const FALLBACK_PRESET: &str = "default";

/// One layer of generation settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    pub preset: Option<String>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub saturation: Option<f64>,
    pub accent_offset: Option<f64>,
    pub accent_l_spread: Option<f64>,
    pub br_accent_shift: Option<f64>,
    pub br_bg_extra_saturation: Option<f64>,
}

impl PaletteConfig {
    /// Parse a layer from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, wrong value types, or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or doesn't parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Stack `top` over `self`: every field `top` sets wins.
    #[must_use]
    pub fn overlay(self, top: Self) -> Self {
        Self {
            preset: top.preset.or(self.preset),
            background: top.background.or(self.background),
            foreground: top.foreground.or(self.foreground),
            saturation: top.saturation.or(self.saturation),
            accent_offset: top.accent_offset.or(self.accent_offset),
            accent_l_spread: top.accent_l_spread.or(self.accent_l_spread),
            br_accent_shift: top.br_accent_shift.or(self.br_accent_shift),
            br_bg_extra_saturation: top.br_bg_extra_saturation.or(self.br_bg_extra_saturation),
        }
    }

    /// Turn the merged layers into validated generation parameters.
    ///
    /// Starts from the named preset when there is one. Without a preset, an
    /// explicit background starts from plain defaults; with neither, the
    /// fallback preset is used.
    ///
    /// # Errors
    ///
    /// Fails on an unknown preset name or a non-finite number.
    pub fn resolve(&self) -> Result<GenerationParameters> {
        let mut params = match (&self.preset, self.background) {
            (Some(name), _) => require_preset(name)?.params,
            (None, Some(bg)) => GenerationParameters::new(bg),
            (None, None) => {
                tracing::debug!(preset = FALLBACK_PRESET, "no preset or background given");
                require_preset(FALLBACK_PRESET)?.params
            }
        };

        if let Some(bg) = self.background {
            params.background = bg;
        }
        if let Some(fg) = self.foreground {
            params.foreground = Foreground::Explicit(fg);
        }
        if let Some(v) = self.saturation {
            params.saturation = v;
        }
        if let Some(v) = self.accent_offset {
            params.accent_offset = v;
        }
        if let Some(v) = self.accent_l_spread {
            params.accent_l_spread = Some(v);
        }
        if let Some(v) = self.br_accent_shift {
            params.br_accent_shift = Some(v);
        }
        if let Some(v) = self.br_bg_extra_saturation {
            params.br_bg_extra_saturation = v;
        }

        params.validate()?;
        Ok(params)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
