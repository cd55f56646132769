//! Diagnostics: contrast and distance statistics for a generated palette.
//!
//! The report is returned next to the palette rather than printed, so
//! generation stays a pure function. Its `Display` impl renders the fixed
//! multi-line summary; callers decide whether and where to emit it.

use std::fmt;

use lumen_color::Color;

use crate::accent::AccentBase;
use crate::contrast::{Anchors, Direction};
use crate::monotone::Monotones;

/// Summary statistics for one generation run.
///
/// Every distance is a lightness distance (`|ΔL|`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticsReport {
    pub foreground_l: f64,
    pub background_l: f64,
    pub contrast: f64,
    pub direction: Direction,
    /// Accent baseline (the lightest step).
    pub accent_max_l: f64,
    /// Baseline minus one full spread.
    pub accent_min_l: f64,
    pub accent_l_spread: f64,
    /// The reserved bright-accent shift as resolved for this run.
    pub bright_accent_shift: f64,
    /// Foreground to dimmed foreground (`white`).
    pub foreground_comment_distance: f64,
    /// Background to highlight background (`br_black`).
    pub highlight_contrast: f64,
    /// Highlight background to dimmed foreground.
    pub highlight_comment_distance: f64,
    pub highlight_accent_min: f64,
    pub highlight_accent_max: f64,
    pub background_accent_min: f64,
    pub background_accent_max: f64,
}

impl DiagnosticsReport {
    /// Gather statistics from the post-scaling monotones and base accents.
    #[must_use]
    pub fn collect(
        anchors: &Anchors,
        base: &AccentBase,
        bright_accent_shift: f64,
        monotones: &Monotones,
        accents: &[Color; 8],
    ) -> Self {
        let bg = monotones.bg;
        let hi = monotones.br_black;
        let comment = monotones.white;

        let (highlight_accent_min, highlight_accent_max) =
            min_max(accents.iter().map(|a| a.lightness_distance(&hi)));
        let (background_accent_min, background_accent_max) =
            min_max(accents.iter().map(|a| a.lightness_distance(&bg)));

        Self {
            foreground_l: anchors.fg.l,
            background_l: bg.l,
            contrast: anchors.contrast,
            direction: anchors.direction,
            accent_max_l: base.base_l,
            accent_min_l: base.base_l - base.spread,
            accent_l_spread: base.spread,
            bright_accent_shift,
            foreground_comment_distance: anchors.fg.lightness_distance(&comment),
            highlight_contrast: hi.lightness_distance(&bg),
            highlight_comment_distance: hi.lightness_distance(&comment),
            highlight_accent_min,
            highlight_accent_max,
            background_accent_min,
            background_accent_max,
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Foreground: {}", self.foreground_l)?;
        writeln!(f, "Background: {}", self.background_l)?;
        writeln!(f, "Contrast: {}", self.contrast)?;
        writeln!(f, "Accents max lightness: {}", Sig3(self.accent_max_l))?;
        writeln!(f, "Accents min lightness: {}", Sig3(self.accent_min_l))?;
        writeln!(f)?;
        writeln!(f, "Foreground-comment distance:     {}", Sig3(self.foreground_comment_distance))?;
        writeln!(f, "Highlight contrast:              {}", Sig3(self.highlight_contrast))?;
        writeln!(f, "Highlight-comment distance:      {}", Sig3(self.highlight_comment_distance))?;
        writeln!(
            f,
            "Highlight-accent distance:   min {}, max {}",
            Sig3(self.highlight_accent_min),
            Sig3(self.highlight_accent_max)
        )?;
        writeln!(
            f,
            "Background-accent distance:  min {}, max {}",
            Sig3(self.background_accent_min),
            Sig3(self.background_accent_max)
        )
    }
}

// ---------------------------------------------------------------------------
// Three-significant-digit formatting
// ---------------------------------------------------------------------------

/// Significant digits shown for derived statistics.
const SIGNIFICANT_DIGITS: usize = 3;

/// General-format number with [`SIGNIFICANT_DIGITS`] significant digits.
///
/// Fixed notation keeps at least one fractional digit (`92.0`, `57.5`);
/// scientific notation takes over when the decimal exponent is below −4 or
/// at least `SIGNIFICANT_DIGITS − 1` (`1e+02`, `1.23e-05`).
struct Sig3(f64);

impl fmt::Display for Sig3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_significant(self.0, SIGNIFICANT_DIGITS))
    }
}

/// Format `value` with `digits` significant digits (`digits >= 1`).
#[must_use]
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_owned();
    }

    let digits = digits.max(1);
    // Round once in scientific form to learn the exponent after rounding.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let max_fixed_exponent = i32::try_from(digits).unwrap_or(i32::MAX) - 1;
    if exponent < -4 || exponent >= max_fixed_exponent {
        let mantissa = trim_fraction(mantissa, 0);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(max_fixed_exponent - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}"), 1)
    }
}

/// Strip trailing fractional zeros, keeping at least `keep` fractional
/// digits. With `keep == 0` a bare trailing `.` is dropped too.
fn trim_fraction(s: &str, keep: usize) -> String {
    let Some(dot) = s.find('.') else {
        return if keep == 0 {
            s.to_owned()
        } else {
            format!("{s}.{}", "0".repeat(keep))
        };
    };
    let frac = s[dot + 1..].trim_end_matches('0');
    if frac.len() >= keep {
        if frac.is_empty() {
            s[..dot].to_owned()
        } else {
            format!("{}.{frac}", &s[..dot])
        }
    } else {
        format!("{}.{frac}{}", &s[..dot], "0".repeat(keep - frac.len()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── format_significant ──────────────────────────────────────────

    #[test]
    fn fixed_notation_keeps_one_fraction_digit() {
        assert_eq!(format_significant(92.0, 3), "92.0");
        assert_eq!(format_significant(26.0, 3), "26.0");
        assert_eq!(format_significant(1.0, 3), "1.0");
    }

    #[test]
    fn fixed_notation_rounds_to_three_digits() {
        assert_eq!(format_significant(57.5, 3), "57.5");
        assert_eq!(format_significant(12.345, 3), "12.3");
        assert_eq!(format_significant(19.166_666, 3), "19.2");
        assert_eq!(format_significant(0.5, 3), "0.5");
        assert_eq!(format_significant(-3.14159, 3), "-3.14");
    }

    #[test]
    fn small_values_stay_fixed_down_to_1e_minus_4() {
        assert_eq!(format_significant(0.000_123_4, 3), "0.000123");
    }

    #[test]
    fn scientific_for_large_and_tiny() {
        assert_eq!(format_significant(100.0, 3), "1e+02");
        assert_eq!(format_significant(123.4, 3), "1.23e+02");
        assert_eq!(format_significant(0.000_012_341, 3), "1.23e-05");
    }

    #[test]
    fn rounding_can_bump_the_exponent() {
        // 99.96 rounds to 1.00e2, which is scientific.
        assert_eq!(format_significant(99.96, 3), "1e+02");
    }

    #[test]
    fn zero_and_non_finite() {
        assert_eq!(format_significant(0.0, 3), "0.0");
        assert_eq!(format_significant(f64::NAN, 3), "nan");
        assert_eq!(format_significant(f64::NEG_INFINITY, 3), "-inf");
    }

    // ── Report ──────────────────────────────────────────────────────

    #[test]
    fn min_max_of_distances() {
        let (lo, hi) = min_max([3.0, -1.0, 7.5].into_iter());
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 7.5).abs() < 1e-12);
    }

    #[test]
    fn renders_fixed_layout() {
        let report = DiagnosticsReport {
            foreground_l: 80.0,
            background_l: 20.0,
            contrast: 60.0,
            direction: Direction::LightOnDark,
            accent_max_l: 77.5,
            accent_min_l: 58.333_333,
            accent_l_spread: 19.166_667,
            bright_accent_shift: 6.0,
            foreground_comment_distance: 22.5,
            highlight_contrast: 15.0,
            highlight_comment_distance: 22.5,
            highlight_accent_min: 26.4,
            highlight_accent_max: 42.5,
            background_accent_min: 41.4,
            background_accent_max: 57.5,
        };
        let expected = "\
Foreground: 80
Background: 20
Contrast: 60
Accents max lightness: 77.5
Accents min lightness: 58.3

Foreground-comment distance:     22.5
Highlight contrast:              15.0
Highlight-comment distance:      22.5
Highlight-accent distance:   min 26.4, max 42.5
Background-accent distance:  min 41.4, max 57.5
";
        assert_eq!(report.to_string(), expected);
    }
}
