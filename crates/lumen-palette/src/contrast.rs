//! Anchor resolution: the foreground default, contrast and direction.
//!
//! Everything downstream is expressed in terms of three scalars read off the
//! two anchors:
//!
//! - `contrast`: absolute lightness gap between foreground and background
//! - `direction`: +1 for light-on-dark palettes, −1 for dark-on-light
//! - the resolved foreground itself
//!
//! "Bright" roles always move lightness by `direction * something`, so the
//! same formulas serve both orientations.

use lumen_color::Color;

use crate::params::Foreground;

/// Lightness gap used when the foreground is derived from the background.
pub const DEFAULT_FOREGROUND_GAP: f64 = 60.0;

/// Backgrounds at or below this lightness get a lighter default foreground.
const DARK_BACKGROUND_MAX_L: f64 = 50.0;

/// Which way "brighter" points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Light text on a dark background: brighter means higher L.
    LightOnDark,
    /// Dark text on a light background: brighter means lower L.
    DarkOnLight,
}

impl Direction {
    /// The sign applied to every lightness shift: +1.0 or −1.0.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::LightOnDark => 1.0,
            Self::DarkOnLight => -1.0,
        }
    }
}

/// Fill in a gray foreground when the caller didn't supply one.
#[must_use]
pub fn resolve_foreground(background: Color, foreground: Foreground) -> Color {
    match foreground {
        Foreground::Explicit(fg) => fg,
        Foreground::Default if background.l <= DARK_BACKGROUND_MAX_L => {
            Color::gray(background.l + DEFAULT_FOREGROUND_GAP)
        }
        Foreground::Default => Color::gray(background.l - DEFAULT_FOREGROUND_GAP),
    }
}

/// The resolved anchors and the scalars derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub bg: Color,
    pub fg: Color,
    pub contrast: f64,
    pub direction: Direction,
}

impl Anchors {
    /// Analyze a background/foreground pair.
    #[must_use]
    pub fn analyze(bg: Color, fg: Color) -> Self {
        let contrast = (fg.l - bg.l).abs();
        let direction = if bg.l > fg.l {
            Direction::DarkOnLight
        } else {
            Direction::LightOnDark
        };
        Self { bg, fg, contrast, direction }
    }

    /// Lightness offset of `contrast / divisor` in the palette's direction.
    #[must_use]
    pub fn step(&self, divisor: f64) -> f64 {
        self.direction.sign() * self.contrast / divisor
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── resolve_foreground ──────────────────────────────────────────

    #[test]
    fn dark_background_gets_lighter_foreground() {
        let fg = resolve_foreground(Color::gray(20.0), Foreground::Default);
        assert_eq!(fg, Color::lab(80.0, 0.0, 0.0));
    }

    #[test]
    fn light_background_gets_darker_foreground() {
        let fg = resolve_foreground(Color::gray(70.0), Foreground::Default);
        assert_eq!(fg, Color::lab(10.0, 0.0, 0.0));
    }

    #[test]
    fn fifty_counts_as_dark() {
        let fg = resolve_foreground(Color::gray(50.0), Foreground::Default);
        assert!(approx_eq(fg.l, 110.0, 1e-12));
    }

    #[test]
    fn default_foreground_ignores_background_chroma() {
        let fg = resolve_foreground(Color::lab(23.0, -12.0, -12.0), Foreground::Default);
        assert!(fg.is_achromatic());
    }

    #[test]
    fn explicit_foreground_passes_through() {
        let given = Color::lab(42.0, -6.0, -6.0);
        assert_eq!(resolve_foreground(Color::gray(96.0), Foreground::Explicit(given)), given);
    }

    // ── Anchors ─────────────────────────────────────────────────────

    #[test]
    fn contrast_is_absolute() {
        let a = Anchors::analyze(Color::gray(20.0), Color::gray(80.0));
        let b = Anchors::analyze(Color::gray(80.0), Color::gray(20.0));
        assert!(approx_eq(a.contrast, 60.0, 1e-12));
        assert!(approx_eq(b.contrast, 60.0, 1e-12));
    }

    #[test]
    fn direction_flips_with_orientation() {
        let dark = Anchors::analyze(Color::gray(20.0), Color::gray(80.0));
        let light = Anchors::analyze(Color::gray(80.0), Color::gray(20.0));
        assert_eq!(dark.direction, Direction::LightOnDark);
        assert_eq!(light.direction, Direction::DarkOnLight);
    }

    #[test]
    fn equal_lightness_is_light_on_dark() {
        let a = Anchors::analyze(Color::gray(50.0), Color::gray(50.0));
        assert_eq!(a.direction, Direction::LightOnDark);
        assert!(approx_eq(a.contrast, 0.0, 1e-12));
    }

    #[test]
    fn step_follows_direction() {
        let dark = Anchors::analyze(Color::gray(20.0), Color::gray(80.0));
        let light = Anchors::analyze(Color::gray(80.0), Color::gray(20.0));
        assert!(approx_eq(dark.step(4.0), 15.0, 1e-12));
        assert!(approx_eq(light.step(4.0), -15.0, 1e-12));
    }
}
