//! Generation parameters: the two anchors and the five tuning knobs.

use lumen_color::Color;

use crate::error::PaletteError;

/// The caller's foreground choice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Foreground {
    /// Derive a gray foreground 60 lightness units away from the background.
    #[default]
    Default,
    /// Use this color as the foreground anchor.
    Explicit(Color),
}

impl From<Option<Color>> for Foreground {
    fn from(color: Option<Color>) -> Self {
        color.map_or(Self::Default, Self::Explicit)
    }
}

/// Everything [`generate_palette`](crate::generate_palette) needs.
///
/// Construct with [`GenerationParameters::new`] and adjust with the
/// `with_*` setters:
///
/// ```
/// use lumen_color::Color;
/// use lumen_palette::GenerationParameters;
///
/// let params = GenerationParameters::new(Color::lab(23.0, -12.0, -12.0))
///     .with_foreground(Color::lab(75.0, -2.0, -2.0))
///     .with_saturation(1.2);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub background: Color,
    pub foreground: Foreground,
    /// Multiplier applied to every role's chroma.
    pub saturation: f64,
    /// Moves the accent baseline away from the foreground.
    pub accent_offset: f64,
    /// Lightness distance between accent steps; derived when `None` or zero.
    pub accent_l_spread: Option<f64>,
    /// Reserved bright-accent lightness shift; derived when `None` or zero.
    pub br_accent_shift: Option<f64>,
    /// Chroma boost for the two bright background roles.
    pub br_bg_extra_saturation: f64,
}

impl GenerationParameters {
    pub const DEFAULT_SATURATION: f64 = 1.0;
    pub const DEFAULT_ACCENT_OFFSET: f64 = 0.0;
    pub const DEFAULT_BR_BG_EXTRA_SATURATION: f64 = 1.1;

    /// Parameters with every knob at its default.
    #[must_use]
    pub const fn new(background: Color) -> Self {
        Self {
            background,
            foreground: Foreground::Default,
            saturation: Self::DEFAULT_SATURATION,
            accent_offset: Self::DEFAULT_ACCENT_OFFSET,
            accent_l_spread: None,
            br_accent_shift: None,
            br_bg_extra_saturation: Self::DEFAULT_BR_BG_EXTRA_SATURATION,
        }
    }

    #[must_use]
    pub const fn with_foreground(mut self, foreground: Color) -> Self {
        self.foreground = Foreground::Explicit(foreground);
        self
    }

    #[must_use]
    pub const fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    #[must_use]
    pub const fn with_accent_offset(mut self, offset: f64) -> Self {
        self.accent_offset = offset;
        self
    }

    #[must_use]
    pub const fn with_accent_l_spread(mut self, spread: f64) -> Self {
        self.accent_l_spread = Some(spread);
        self
    }

    #[must_use]
    pub const fn with_br_accent_shift(mut self, shift: f64) -> Self {
        self.br_accent_shift = Some(shift);
        self
    }

    #[must_use]
    pub const fn with_br_bg_extra_saturation(mut self, factor: f64) -> Self {
        self.br_bg_extra_saturation = factor;
        self
    }

    /// Check that every number is finite and an explicit spread is not
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NonFinite`] naming the first offending field,
    /// or [`PaletteError::NegativeSpread`] when `accent_l_spread` is below
    /// zero (a negative spread would invert the hue ordering).
    pub fn validate(&self) -> Result<(), PaletteError> {
        check_color("background", self.background)?;
        if let Foreground::Explicit(fg) = self.foreground {
            check_color("foreground", fg)?;
        }
        check("saturation", self.saturation)?;
        check("accent_offset", self.accent_offset)?;
        if let Some(spread) = self.accent_l_spread {
            check("accent_l_spread", spread)?;
            if spread < 0.0 {
                return Err(PaletteError::NegativeSpread(spread));
            }
        }
        if let Some(shift) = self.br_accent_shift {
            check("br_accent_shift", shift)?;
        }
        check("br_bg_extra_saturation", self.br_bg_extra_saturation)
    }
}

fn check(field: &'static str, value: f64) -> Result<(), PaletteError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PaletteError::NonFinite { field, value })
    }
}

fn check_color(field: &'static str, color: Color) -> Result<(), PaletteError> {
    color
        .to_array()
        .into_iter()
        .find(|v| !v.is_finite())
        .map_or(Ok(()), |value| Err(PaletteError::NonFinite { field, value }))
}

/// An optional knob where zero means "not supplied".
pub(crate) fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}
