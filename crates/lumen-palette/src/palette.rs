//! Palette assembly: the generation pipeline end to end.
//!
//! Runs every stage in order, applies the global lightness scale and the
//! saturation multiplier, and packs the 22 roles into a [`Palette`].

use std::ops::Index;

use lumen_color::Color;
use tracing::{debug, trace};

use crate::accent::{AccentBase, bright_accents, resolve_bright_shift, saturation_factor};
use crate::contrast::{Anchors, resolve_foreground};
use crate::diagnostics::DiagnosticsReport;
use crate::monotone::Monotones;
use crate::params::GenerationParameters;
use crate::role::{Hue, Role};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A complete palette: one color for every [`Role`].
///
/// Backed by a fixed table, so every role is always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Color; Role::COUNT],
}

impl Palette {
    fn from_parts(monotones: [Color; 6], accents: [Color; 8], bright: [Color; 8]) -> Self {
        let mut colors = [Color::BLACK; Role::COUNT];
        colors[..6].copy_from_slice(&monotones);
        colors[6..14].copy_from_slice(&accents);
        colors[14..].copy_from_slice(&bright);
        Self { colors }
    }

    #[must_use]
    pub const fn get(&self, role: Role) -> Color {
        self.colors[role.index()]
    }

    /// Always [`Role::COUNT`].
    #[must_use]
    pub const fn len(&self) -> usize {
        Role::COUNT
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// `(role, color)` pairs in canonical role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Multiply every role's chroma by `saturation`.
    #[must_use]
    pub fn saturate(self, saturation: f64) -> Self {
        Self {
            colors: self.colors.map(|c| c.scale_chroma(saturation)),
        }
    }
}

impl Index<Role> for Palette {
    type Output = Color;

    fn index(&self, role: Role) -> &Color {
        &self.colors[role.index()]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Palette {
    /// A map from role name to `[L, a, b]`.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.name(), &color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// LightnessScale
// ---------------------------------------------------------------------------

/// Compresses lightness toward the foreground: `L' = fg.L − (fg.L − L)·s`.
///
/// Generation always uses [`LightnessScale::IDENTITY`]; the type exists so a
/// non-identity scale can be threaded through later without touching the
/// stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessScale(pub f64);

impl LightnessScale {
    pub const IDENTITY: Self = Self(1.0);

    #[must_use]
    pub fn apply(self, fg_l: f64, color: Color) -> Color {
        // fg.L − (fg.L − L) is not exactly L in floating point.
        if self == Self::IDENTITY {
            return color;
        }
        color.with_lightness((fg_l - color.l).mul_add(-self.0, fg_l))
    }
}

/// The scale generation runs with.
const LIGHTNESS_SCALE: LightnessScale = LightnessScale::IDENTITY;

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// The output of one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generation {
    pub palette: Palette,
    pub report: DiagnosticsReport,
}

/// Derive a complete palette from the anchors and knobs in `params`.
///
/// Pure and total: every finite input maps to exactly one palette. Call
/// [`GenerationParameters::validate`] first when the numbers come from
/// untrusted input.
///
/// ```
/// use lumen_color::Color;
/// use lumen_palette::{GenerationParameters, Role, generate_palette};
///
/// let out = generate_palette(&GenerationParameters::new(Color::gray(20.0)));
/// assert_eq!(out.palette[Role::Fg], Color::gray(80.0));
/// assert_eq!(out.palette[Role::Black].l, 26.0);
/// ```
#[must_use]
pub fn generate_palette(params: &GenerationParameters) -> Generation {
    let bg = params.background;
    let fg = resolve_foreground(bg, params.foreground);
    let anchors = Anchors::analyze(bg, fg);

    let monotones = Monotones::compute(&anchors, params.br_bg_extra_saturation);
    let base = AccentBase::compute(&anchors, params.accent_offset, params.accent_l_spread);
    let accents = base.accents();
    let bright = bright_accents(fg.l, accents, base.spread);
    let bright_shift = resolve_bright_shift(&anchors, params.br_accent_shift);

    debug!(
        contrast = anchors.contrast,
        direction = ?anchors.direction,
        accent_base_l = base.base_l,
        accent_l_spread = base.spread,
        "resolved palette scalars"
    );
    for (hue, accent) in Hue::ALL.iter().zip(&accents) {
        trace!(
            hue = hue.name(),
            l = accent.l,
            factor = saturation_factor(fg.l, accent.l, base.spread),
            "accent"
        );
    }

    let monotones = monotones.map(|c| LIGHTNESS_SCALE.apply(fg.l, c));
    let accents = accents.map(|c| LIGHTNESS_SCALE.apply(fg.l, c));

    let report = DiagnosticsReport::collect(&anchors, &base, bright_shift, &monotones, &accents);
    let palette =
        Palette::from_parts(monotones.to_array(), accents, bright).saturate(params.saturation);

    Generation { palette, report }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
