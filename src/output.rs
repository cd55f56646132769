// SPDX-License-Identifier: MIT
//
// Palette serialization. JSON and TOML map each role name to [L, a, b];
// the text format is an aligned table for reading in a terminal.

use anyhow::Result;
use lumen_palette::Palette;

use crate::cli::Format;

/// Width of the role-name column in the text format.
const NAME_WIDTH: usize = 10;

/// Render `palette` in the requested format.
///
/// # Errors
///
/// Fails only if the serializer does.
pub fn render(palette: &Palette, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => {
            let mut s = serde_json::to_string_pretty(palette)?;
            s.push('\n');
            s
        }
        Format::Toml => toml::to_string(palette)?,
        Format::Text => render_text(palette),
    })
}

fn render_text(palette: &Palette) -> String {
    palette
        .iter()
        .map(|(role, color)| format!("{:<NAME_WIDTH$} {color:.2}\n", role.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_color::Color;
    use lumen_palette::{GenerationParameters, generate_palette};

    fn palette() -> Palette {
        generate_palette(&GenerationParameters::new(Color::gray(20.0))).palette
    }

    #[test]
    fn json_has_every_role() {
        let json = render(&palette(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 22);
        assert_eq!(map["bg"], serde_json::json!([20.0, 0.0, 0.0]));
        assert_eq!(map["br_white"], serde_json::json!([92.0, 0.0, 0.0]));
    }

    #[test]
    fn toml_has_every_role() {
        let text = render(&palette(), Format::Toml).unwrap();
        let table: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(table.len(), 22);
        assert!(table.contains_key("br_magenta"));
    }

    #[test]
    fn text_is_one_aligned_line_per_role() {
        let text = render(&palette(), Format::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0], "bg         20.00 0.00 0.00");
        assert!(lines.iter().any(|l| l.starts_with("br_black   35.00 ")));
    }

    #[test]
    fn text_lines_are_newline_terminated() {
        let text = render(&palette(), Format::Text).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 22);
    }
}
