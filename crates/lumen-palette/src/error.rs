//! Errors for the fallible edges around palette generation.
//!
//! Generation itself is total. What can fail is everything that turns text
//! or loosely-typed input into a [`GenerationParameters`]: non-finite numbers,
//! a negative accent spread, role names and preset names that don't exist.
//!
//! [`GenerationParameters`]: crate::params::GenerationParameters

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("accent_l_spread must not be negative, got {0}")]
    NegativeSpread(f64),

    #[error("unknown palette role: {0}")]
    UnknownRole(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let e = PaletteError::NonFinite { field: "saturation", value: f64::NAN };
        assert_eq!(e.to_string(), "saturation must be a finite number, got NaN");
        assert_eq!(
            PaletteError::NegativeSpread(-5.0).to_string(),
            "accent_l_spread must not be negative, got -5"
        );
        assert_eq!(PaletteError::UnknownRole("br_pink".into()).to_string(), "unknown palette role: br_pink");
        assert_eq!(PaletteError::UnknownPreset("solarized".into()).to_string(), "unknown preset: solarized");
    }
}
