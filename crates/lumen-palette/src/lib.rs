//! # lumen-palette: Palette Generation Engine
//!
//! Derives a complete 22-role terminal palette from a background anchor, an
//! optional foreground anchor, and five scalar knobs. The same formulas serve
//! dark and light palettes, keeping contrast legible and accent saturation
//! balanced whatever anchors come in.
//!
//! # Architecture
//!
//! ```text
//! GenerationParameters (bg, fg?, saturation, offset, spread?, shift?, extra)
//!     │
//!     ▼
//! contrast.rs:    default foreground, contrast, direction
//!     │
//!     ├──► monotone.rs:  bg, black, br_black, fg, white, br_white
//!     │
//!     ▼
//! accent.rs:      baseline + spread → 8 accents → saturation factors
//!                 → 8 bright accents at fg.L
//!     │
//!     ▼
//! palette.rs:     lightness scale → saturation → Palette (22 roles)
//!     │
//!     └──► diagnostics.rs: DiagnosticsReport (returned, never printed)
//! ```
//!
//! # Color Space
//!
//! All arithmetic happens on `(L, a, b)` triples from [`lumen_color`]. No
//! gamut mapping or device conversion is done here; the palette carries
//! exactly the values the formulas produce.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Lightness/spread/shift variable names are inherently similar.
#![allow(clippy::similar_names)]
// Exact float comparison is intended wherever it appears (identity scale,
// "zero means unset" knobs, factor anchor points).
#![allow(clippy::float_cmp)]

pub mod accent;
pub mod builtin;
pub mod contrast;
pub mod diagnostics;
pub mod error;
pub mod monotone;
pub mod palette;
pub mod params;
pub mod role;

pub use builtin::{Preset, builtin_names, builtin_preset, require_preset};
pub use contrast::Direction;
pub use diagnostics::DiagnosticsReport;
pub use error::PaletteError;
pub use palette::{Generation, LightnessScale, Palette, generate_palette};
pub use params::{Foreground, GenerationParameters};
pub use role::{Hue, Role};
