//! Monotones: the six background/foreground roles.
//!
//! Bright roles step away from their anchor by a fraction of the overall
//! contrast, in the palette's direction. The two bright backgrounds get
//! extra chroma, since a brightened background otherwise reads as washed
//! out next to the base one.

use lumen_color::Color;

use crate::contrast::Anchors;

/// Weight of the foreground in the dimmed-foreground blend (the rest is bg).
const DIM_FG_WEIGHT: f64 = 5.0 / 8.0;

/// Contrast divisors for each bright step.
const BR_BG_DIVISOR: f64 = 10.0;
const HI_BG_DIVISOR: f64 = 4.0;
const BR_FG_DIVISOR: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monotones {
    pub bg: Color,
    /// Brighter background fill.
    pub black: Color,
    /// Highlight background.
    pub br_black: Color,
    pub fg: Color,
    /// Dimmed foreground (comments).
    pub white: Color,
    /// Brighter foreground.
    pub br_white: Color,
}

impl Monotones {
    #[must_use]
    pub fn compute(anchors: &Anchors, br_bg_extra_saturation: f64) -> Self {
        let Anchors { bg, fg, .. } = *anchors;
        let br_bg = bg.scale_chroma(br_bg_extra_saturation);

        Self {
            bg,
            black: br_bg.with_lightness(bg.l + anchors.step(BR_BG_DIVISOR)),
            br_black: br_bg.with_lightness(bg.l + anchors.step(HI_BG_DIVISOR)),
            fg,
            white: bg.mix(&fg, DIM_FG_WEIGHT),
            br_white: fg.shift_lightness(anchors.step(BR_FG_DIVISOR)),
        }
    }

    /// Apply `f` to every role.
    #[must_use]
    pub fn map(self, f: impl Fn(Color) -> Color) -> Self {
        Self {
            bg: f(self.bg),
            black: f(self.black),
            br_black: f(self.br_black),
            fg: f(self.fg),
            white: f(self.white),
            br_white: f(self.br_white),
        }
    }

    /// The six roles in canonical order.
    #[must_use]
    pub const fn to_array(self) -> [Color; 6] {
        [self.bg, self.black, self.br_black, self.fg, self.white, self.br_white]
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

    fn dark() -> Monotones {
        Monotones::compute(&Anchors::analyze(Color::gray(20.0), Color::gray(80.0)), 1.1)
    }

    #[test]
    fn anchors_pass_through() {
        let bg = Color::lab(23.0, -12.0, -12.0);
        let fg = Color::lab(75.0, -2.0, -2.0);
        let m = Monotones::compute(&Anchors::analyze(bg, fg), 1.1);
        assert_eq!(m.bg, bg);
        assert_eq!(m.fg, fg);
    }

    #[test]
    fn dark_bright_backgrounds() {
        let m = dark();
        assert!(approx_eq(m.black.l, 26.0, 1e-9), "black.l = {}", m.black.l);
        assert!(approx_eq(m.br_black.l, 35.0, 1e-9), "br_black.l = {}", m.br_black.l);
    }

    #[test]
    fn dark_foregrounds() {
        let m = dark();
        assert!(approx_eq(m.white.l, 57.5, 1e-9), "white.l = {}", m.white.l);
        assert!(approx_eq(m.br_white.l, 92.0, 1e-9), "br_white.l = {}", m.br_white.l);
    }

    #[test]
    fn light_palette_steps_down() {
        let m = Monotones::compute(&Anchors::analyze(Color::gray(80.0), Color::gray(20.0)), 1.1);
        assert!(approx_eq(m.black.l, 74.0, 1e-9));
        assert!(approx_eq(m.br_black.l, 65.0, 1e-9));
        assert!(approx_eq(m.br_white.l, 8.0, 1e-9));
    }

    #[test]
    fn bright_backgrounds_get_extra_chroma() {
        let bg = Color::lab(23.0, -10.0, -20.0);
        let m = Monotones::compute(&Anchors::analyze(bg, Color::gray(75.0)), 1.5);
        assert!(approx_eq(m.black.a, -15.0, 1e-9));
        assert!(approx_eq(m.black.b, -30.0, 1e-9));
        assert!(approx_eq(m.br_black.a, m.black.a, 1e-12));
        assert!(approx_eq(m.br_black.b, m.black.b, 1e-12));
    }

    #[test]
    fn dim_foreground_blends_chroma() {
        let bg = Color::lab(20.0, 8.0, -16.0);
        let fg = Color::lab(80.0, 0.0, 8.0);
        let m = Monotones::compute(&Anchors::analyze(bg, fg), 1.1);
        assert!(approx_eq(m.white.a, 3.0, 1e-9));
        assert!(approx_eq(m.white.b, -1.0, 1e-9));
    }

    #[test]
    fn bright_foreground_keeps_chroma() {
        let fg = Color::lab(75.0, -2.0, -3.0);
        let m = Monotones::compute(&Anchors::analyze(Color::gray(23.0), fg), 1.1);
        assert_eq!((m.br_white.a, m.br_white.b), (fg.a, fg.b));
    }

    #[test]
    fn map_touches_every_role() {
        let m = dark().map(|c| c.with_lightness(1.0));
        assert!(m.to_array().iter().all(|c| approx_eq(c.l, 1.0, 1e-12)));
    }
}
