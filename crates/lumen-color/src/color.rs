// SPDX-License-Identifier: MIT
//
// lumen color value: a perceptual (L, a, b) triple.
//
// Single-character field names (l, a, b) are the standard convention in
// color science. Renaming them would make the palette formulas harder to
// compare against the literature.
#![allow(clippy::many_single_char_names)]
//
// Every palette role is derived with simple arithmetic in this space:
// shift lightness along L, scale chroma by multiplying a and b together
// (which keeps the hue angle), and blend two colors component-wise.
// Nothing in here clamps to a gamut; out-of-range values are carried
// through untouched so the caller sees exactly what the formulas produced.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored as lightness plus two opponent chroma axes.
///
/// `Color` is an immutable value type: every operation returns a new color.
/// Equality is exact (bitwise on each component), so a color passed through
/// the palette engine untouched compares equal to the input.
///
/// # Examples
///
/// ```
/// use lumen_color::Color;
///
/// let bg = Color::lab(20.0, 0.0, 0.0);
/// let fg = Color::gray(80.0);
///
/// // Component-wise blend, 5/8 of the way to the foreground.
/// let comment = bg.mix(&fg, 5.0 / 8.0);
/// assert_eq!(comment, Color::gray(57.5));
///
/// // Scaling chroma keeps the hue angle.
/// let red = Color::lab(50.0, 63.0, 40.0);
/// let muted = red.scale_chroma(0.5);
/// assert!((muted.hue() - red.hue()).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct Color {
    /// Lightness: 0.0 (black) to 100.0 (white), nominally.
    pub l: f64,

    /// Green (−) to red (+) opponent axis.
    pub a: f64,

    /// Blue (−) to yellow (+) opponent axis.
    pub b: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from lightness and the two chroma components.
    #[inline]
    #[must_use]
    pub const fn lab(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create an achromatic color at the given lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f64) -> Self {
        Self::lab(lightness, 0.0, 0.0)
    }

    /// Parse a color from `"L,a,b"` (whitespace around each number allowed).
    ///
    /// Returns `None` unless the string holds exactly three numbers.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(',').map(|p| p.trim().parse::<f64>());
        let l = parts.next()?.ok()?;
        let a = parts.next()?.ok()?;
        let b = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::lab(l, a, b))
    }

    /// Pure black.
    pub const BLACK: Self = Self::gray(0.0);

    /// Pure white.
    pub const WHITE: Self = Self::gray(100.0);

    // ─── Inspection ──────────────────────────────────────────────────────

    /// Chroma: distance from the neutral axis, `sqrt(a² + b²)`.
    #[inline]
    #[must_use]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue angle in degrees, 0.0 to 360.0. Meaningless for achromatic colors
    /// (returns 0.0).
    #[must_use]
    pub fn hue(self) -> f64 {
        if self.is_achromatic() {
            return 0.0;
        }
        self.b.atan2(self.a).to_degrees().rem_euclid(360.0)
    }

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.chroma() < 1e-9
    }

    /// Whether every component is a finite number.
    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Return a copy with lightness replaced, chroma untouched.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Return a copy with lightness moved by `delta` (no clamping).
    #[inline]
    #[must_use]
    pub fn shift_lightness(self, delta: f64) -> Self {
        self.with_lightness(self.l + delta)
    }

    /// Multiply both chroma components by `factor`.
    ///
    /// Positive factors keep the hue angle; zero yields an achromatic color
    /// at the same lightness.
    #[inline]
    #[must_use]
    pub fn scale_chroma(self, factor: f64) -> Self {
        Self {
            a: self.a * factor,
            b: self.b * factor,
            ..self
        }
    }

    /// Blend with another color component-wise.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Values outside
    /// that range extrapolate along the same line.
    #[must_use]
    pub fn mix(self, other: &Self, t: f64) -> Self {
        let inv_t = 1.0 - t;
        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            a: self.a.mul_add(inv_t, other.a * t),
            b: self.b.mul_add(inv_t, other.b * t),
        }
    }

    /// Absolute lightness difference to another color.
    #[inline]
    #[must_use]
    pub fn lightness_distance(self, other: &Self) -> f64 {
        (self.l - other.l).abs()
    }

    /// The components as an `[L, a, b]` array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::lab({:.4}, {:.4}, {:.4})", self.l, self.a, self.b)
    }
}

impl fmt::Display for Color {
    /// `L a b` with two decimals, e.g. `57.50 0.00 -3.25`. The formatter's
    /// precision, when given, overrides the default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        write!(f, "{:.p$} {:.p$} {:.p$}", self.l, self.a, self.b)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f64; 3]> for Color {
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self::lab(l, a, b)
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from((l, a, b): (f64, f64, f64)) -> Self {
        Self::lab(l, a, b)
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
