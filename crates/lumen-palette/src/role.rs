//! The closed set of palette roles.
//!
//! Six monotones plus eight accent hues, each with a bright variant: 22
//! roles in total. Every role has a canonical snake_case name (`"bg"`,
//! `"br_black"`, `"violet"`, `"br_violet"`) that config files and output
//! formats use.

use std::fmt;
use std::str::FromStr;

use crate::error::PaletteError;

// ---------------------------------------------------------------------------
// Hue
// ---------------------------------------------------------------------------

/// One of the eight accent hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hue {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Violet,
    Magenta,
}

impl Hue {
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Violet,
        Self::Magenta,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Magenta => "magenta",
        }
    }

    /// Name of the bright variant (`br_` prefix).
    #[must_use]
    pub const fn bright_name(self) -> &'static str {
        match self {
            Self::Red => "br_red",
            Self::Orange => "br_orange",
            Self::Yellow => "br_yellow",
            Self::Green => "br_green",
            Self::Cyan => "br_cyan",
            Self::Blue => "br_blue",
            Self::Violet => "br_violet",
            Self::Magenta => "br_magenta",
        }
    }

    /// How many lightness spreads this hue sits below the accent baseline.
    ///
    /// Yellow reads brightest at equal L, so it sits on the baseline; red and
    /// blue read darkest and sit lowest.
    #[must_use]
    pub const fn lightness_step(self) -> f64 {
        match self {
            Self::Red | Self::Blue => 0.84,
            Self::Orange => 0.48,
            Self::Yellow => 0.0,
            Self::Green => 0.36,
            Self::Cyan => 0.12,
            Self::Violet => 0.66,
            Self::Magenta => 0.50,
        }
    }

    /// The fixed `(a, b)` chroma pair that gives the hue its identity.
    #[must_use]
    pub const fn chroma(self) -> (f64, f64) {
        match self {
            Self::Red => (63.0, 40.0),
            Self::Orange => (37.0, 50.0),
            Self::Yellow => (6.0, 68.0),
            Self::Green => (-38.0, 55.0),
            Self::Cyan => (-40.0, -4.0),
            Self::Blue => (0.0, -57.0),
            Self::Violet => (30.0, -45.0),
            Self::Magenta => (55.0, -15.0),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A named slot in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// The background anchor, unchanged.
    Bg,
    /// Slightly brighter background fill.
    Black,
    /// Highlight background (selections, cursor line).
    BrBlack,
    /// The foreground anchor.
    Fg,
    /// Dimmed foreground for comments and secondary text.
    White,
    /// Emphasized foreground.
    BrWhite,
    Accent(Hue),
    BrightAccent(Hue),
}

impl Role {
    /// Number of roles in every palette.
    pub const COUNT: usize = 22;

    /// The six grayscale-like roles.
    pub const MONOTONES: [Self; 6] = [
        Self::Bg,
        Self::Black,
        Self::BrBlack,
        Self::Fg,
        Self::White,
        Self::BrWhite,
    ];

    /// Every role in canonical order: monotones, accents, bright accents.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self::Bg; Self::COUNT];
        let mut i = 0;
        while i < 6 {
            all[i] = Self::MONOTONES[i];
            i += 1;
        }
        let mut h = 0;
        while h < 8 {
            all[6 + h] = Self::Accent(Hue::ALL[h]);
            all[14 + h] = Self::BrightAccent(Hue::ALL[h]);
            h += 1;
        }
        all
    };

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Black => "black",
            Self::BrBlack => "br_black",
            Self::Fg => "fg",
            Self::White => "white",
            Self::BrWhite => "br_white",
            Self::Accent(hue) => hue.name(),
            Self::BrightAccent(hue) => hue.bright_name(),
        }
    }

    /// Position in [`Role::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Bg => 0,
            Self::Black => 1,
            Self::BrBlack => 2,
            Self::Fg => 3,
            Self::White => 4,
            Self::BrWhite => 5,
            Self::Accent(hue) => 6 + hue.index(),
            Self::BrightAccent(hue) => 14 + hue.index(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| PaletteError::UnknownRole(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_has_22_distinct_roles() {
        let names: HashSet<_> = Role::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), Role::COUNT);
    }

    #[test]
    fn index_matches_position() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i, "{role} at wrong index");
        }
    }

    #[test]
    fn names_roundtrip_through_from_str() {
        for role in Role::ALL {
            assert_eq!(role.name().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn bright_names_are_prefixed() {
        for hue in Hue::ALL {
            assert_eq!(hue.bright_name(), format!("br_{}", hue.name()));
        }
    }

    #[test]
    fn unknown_role_is_an_error() {
        assert_eq!(
            "br_pink".parse::<Role>(),
            Err(PaletteError::UnknownRole("br_pink".into()))
        );
    }

    #[test]
    fn hue_table_values() {
        assert_eq!(Hue::Red.chroma(), (63.0, 40.0));
        assert_eq!(Hue::Blue.chroma(), (0.0, -57.0));
        assert!((Hue::Magenta.lightness_step() - 0.5).abs() < 1e-12);
        assert!(Hue::Yellow.lightness_step().abs() < 1e-12);
    }

    #[test]
    fn yellow_is_highest_red_and_blue_lowest() {
        let steps: Vec<f64> = Hue::ALL.iter().map(|h| h.lightness_step()).collect();
        let max = steps.iter().copied().fold(f64::MIN, f64::max);
        let min = steps.iter().copied().fold(f64::MAX, f64::min);
        assert!((Hue::Red.lightness_step() - max).abs() < 1e-12);
        assert!((Hue::Blue.lightness_step() - max).abs() < 1e-12);
        assert!((Hue::Yellow.lightness_step() - min).abs() < 1e-12);
    }
}
