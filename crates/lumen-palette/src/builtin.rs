//! Named presets: ready-to-use anchor pairs.
//!
//! Each preset is a background/foreground pair with default knobs. Two dark
//! variants (a tinted blue-gray and a neutral near-black) and two light ones
//! (a warm paper tone and pure white).

use lumen_color::Color;

use crate::error::PaletteError;
use crate::params::GenerationParameters;

/// A named starting point for generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub params: GenerationParameters,
}

impl Preset {
    const fn new(name: &'static str, bg: Color, fg: Color) -> Self {
        Self {
            name,
            params: GenerationParameters::new(bg).with_foreground(fg),
        }
    }
}

/// Look up a builtin preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_preset(name: &str) -> Option<Preset> {
    Some(match name {
        "default" | "dark" => Preset::new(
            "dark",
            Color::lab(23.0, -12.0, -12.0),
            Color::lab(75.0, -2.0, -2.0),
        ),
        "black" => Preset::new("black", Color::gray(10.0), Color::gray(70.0)),
        "light" => Preset::new(
            "light",
            Color::lab(96.0, 0.0, 13.0),
            Color::lab(42.0, -6.0, -6.0),
        ),
        "white" => Preset::new("white", Color::gray(100.0), Color::gray(42.0)),
        _ => return None,
    })
}

/// Like [`builtin_preset`], but unknown names are an error.
///
/// # Errors
///
/// Returns [`PaletteError::UnknownPreset`] if the name is not recognized.
pub fn require_preset(name: &str) -> Result<Preset, PaletteError> {
    builtin_preset(name).ok_or_else(|| PaletteError::UnknownPreset(name.to_owned()))
}

/// List all available builtin preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "dark", "black", "light", "white"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::Direction;
    use crate::palette::generate_palette;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            let preset = builtin_preset(name);
            assert!(preset.is_some(), "Builtin '{name}' failed to resolve");
            assert_eq!(preset.map(|p| p.params.validate()), Some(Ok(())));
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_preset("nonexistent").is_none());
        assert_eq!(
            require_preset("nonexistent"),
            Err(PaletteError::UnknownPreset("nonexistent".into()))
        );
    }

    #[test]
    fn default_is_dark() {
        let a = builtin_preset("default").unwrap();
        let b = builtin_preset("dark").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dark_presets_are_light_on_dark() {
        for name in ["dark", "black"] {
            let g = generate_palette(&builtin_preset(name).unwrap().params);
            assert_eq!(g.report.direction, Direction::LightOnDark, "{name}");
        }
    }

    #[test]
    fn light_presets_are_dark_on_light() {
        for name in ["light", "white"] {
            let g = generate_palette(&builtin_preset(name).unwrap().params);
            assert_eq!(g.report.direction, Direction::DarkOnLight, "{name}");
        }
    }

    #[test]
    fn each_builtin_is_distinct() {
        let names = ["dark", "black", "light", "white"];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(
                    builtin_preset(a).unwrap().params,
                    builtin_preset(b).unwrap().params,
                    "{a} vs {b}"
                );
            }
        }
    }
}
