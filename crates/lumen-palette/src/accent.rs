//! Accents: eight hues around a shared lightness baseline, plus their
//! bright variants.
//!
//! ```text
//! fg.L ──► baseline (capped, offset) ──► spread ──► 8 base accents
//!                                                      │
//!                        l_diff = fg.L − accent.L  ◄───┘
//!                                   │
//!                                   ▼
//!                 saturation factor (0.25 ..= 1.0)
//!                                   │
//!                                   ▼
//!                  8 bright accents at exactly fg.L
//! ```
//!
//! Bright accents all share the foreground's lightness. What keeps them
//! visually balanced is chroma: an accent that already sat right next to the
//! foreground barely changes lightness when brightened, so it gets most of
//! its chroma stripped to stay distinguishable from its base variant.

use lumen_color::Color;

use crate::contrast::{Anchors, Direction};
use crate::params::supplied;
use crate::role::Hue;

/// Accents stop tracking the foreground above this lightness; past it they
/// only climb at half the rate, since very light accents look washed out.
pub const ACCENTS_MAX_REASONABLE_L: f64 = 75.0;

/// Factor for an accent whose lightness equals the foreground's.
const MIN_SATURATION_FACTOR: f64 = 0.25;
/// Factor for an accent a full spread away from the foreground.
const MAX_SATURATION_FACTOR: f64 = 1.0;

// ---------------------------------------------------------------------------
// AccentBase
// ---------------------------------------------------------------------------

/// The shared lightness baseline and spread for the eight accents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentBase {
    /// Lightness of the step-0 accent (yellow).
    pub base_l: f64,
    /// Lightness distance covered by one full step.
    pub spread: f64,
}

impl AccentBase {
    /// Derive the baseline from the anchors, an offset, and an optional
    /// explicit spread (zero counts as absent).
    #[must_use]
    pub fn compute(anchors: &Anchors, accent_offset: f64, accent_l_spread: Option<f64>) -> Self {
        let fg_l = anchors.fg.l;
        let capped = 0.5f64.mul_add(fg_l - ACCENTS_MAX_REASONABLE_L, ACCENTS_MAX_REASONABLE_L);
        let mut base_l = fg_l.min(capped) - anchors.direction.sign() * accent_offset;

        let spread =
            supplied(accent_l_spread).unwrap_or_else(|| (base_l - anchors.bg.l).abs() / 3.0);

        // Dark-on-light: the darkest accents, not the lightest, belong next
        // to the foreground.
        if anchors.direction == Direction::DarkOnLight {
            base_l += spread;
        }

        Self { base_l, spread }
    }

    /// Lightness of the given hue's base accent.
    #[must_use]
    pub fn lightness(&self, hue: Hue) -> f64 {
        hue.lightness_step().mul_add(-self.spread, self.base_l)
    }

    /// The base accent for `hue`.
    #[must_use]
    pub fn accent(&self, hue: Hue) -> Color {
        let (a, b) = hue.chroma();
        Color::lab(self.lightness(hue), a, b)
    }

    /// All eight base accents, in [`Hue::ALL`] order.
    #[must_use]
    pub fn accents(&self) -> [Color; 8] {
        Hue::ALL.map(|hue| self.accent(hue))
    }
}

// ---------------------------------------------------------------------------
// Saturation factor
// ---------------------------------------------------------------------------

/// Where an accent's lightness sits relative to the foreground, after
/// clamping the gap into `[0, spread]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proximity {
    /// Zero spread: there is no range to interpolate over. Validation
    /// rejects negative spreads; `classify` still maps them here.
    Degenerate,
    /// Same lightness as the foreground.
    AtForeground,
    /// A full spread (or more) below the foreground.
    FullSpread,
    /// Strictly between, as a fraction of the spread in `(0, 1)`.
    Between(f64),
}

impl Proximity {
    /// Classify the gap `l_diff = fg.L − accent.L`.
    ///
    /// Gaps outside `[0, spread]` are clamped first: accents lighter than the
    /// foreground count as `AtForeground`, accents more than a spread below
    /// count as `FullSpread`.
    #[must_use]
    pub fn classify(l_diff: f64, spread: f64) -> Self {
        if spread <= 0.0 || spread.is_nan() {
            return Self::Degenerate;
        }
        let l_diff = l_diff.clamp(0.0, spread);
        if l_diff >= spread {
            Self::FullSpread
        } else if l_diff <= 0.0 {
            Self::AtForeground
        } else {
            Self::Between(l_diff / spread)
        }
    }

    /// The chroma multiplier for this proximity.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Degenerate | Self::AtForeground => MIN_SATURATION_FACTOR,
            Self::FullSpread => MAX_SATURATION_FACTOR,
            Self::Between(t) => {
                t.mul_add(MAX_SATURATION_FACTOR - MIN_SATURATION_FACTOR, MIN_SATURATION_FACTOR)
            }
        }
    }
}

/// Chroma multiplier for a bright accent whose base sits at `accent_l`.
#[must_use]
pub fn saturation_factor(fg_l: f64, accent_l: f64, spread: f64) -> f64 {
    Proximity::classify(fg_l - accent_l, spread).factor()
}

// ---------------------------------------------------------------------------
// Bright accents
// ---------------------------------------------------------------------------

/// Bright variant of `accent`: the foreground's lightness, the accent's hue,
/// chroma scaled by its saturation factor.
#[must_use]
pub fn bright_accent(fg_l: f64, accent: Color, spread: f64) -> Color {
    accent
        .scale_chroma(saturation_factor(fg_l, accent.l, spread))
        .with_lightness(fg_l)
}

/// Bright variants of all eight base accents.
#[must_use]
pub fn bright_accents(fg_l: f64, accents: [Color; 8], spread: f64) -> [Color; 8] {
    accents.map(|accent| bright_accent(fg_l, accent, spread))
}

/// The reserved bright-accent shift: explicit when supplied and non-zero,
/// else a tenth of the contrast. Reported only; no role uses it.
#[must_use]
pub fn resolve_bright_shift(anchors: &Anchors, br_accent_shift: Option<f64>) -> f64 {
    supplied(br_accent_shift).unwrap_or(anchors.contrast / 10.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
