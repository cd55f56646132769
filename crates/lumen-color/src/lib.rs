// SPDX-License-Identifier: MIT
//
// lumen-color: the perceptual color value type shared by the palette
// engine and the CLI.
//
// Colors live in a Lab-style perceptual space: one lightness axis (L,
// nominally 0–100) and two opponent chroma axes (a, b, roughly −100…100
// and unbounded in practice). Equal numeric steps read as roughly equal
// visual steps, which is what lets the palette engine express every role
// as plain arithmetic on two anchor colors.
//
// No device color spaces live here. Turning a Color into something a
// display understands is the downstream consumer's job.

pub mod color;

pub use color::Color;
