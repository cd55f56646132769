// SPDX-License-Identifier: MIT
//
// lumen: derive a complete terminal palette from two anchor colors.
//
// This is the binary that wires the palette engine to the outside world:
//
//   lumen-color   → the (L, a, b) value type
//   lumen-palette → the generation pipeline, presets, diagnostics
//
// Each run flows through:
//
//   flags ─┐
//   config ├─► PaletteConfig layers ─► GenerationParameters ─► generate_palette
//   preset ┘                                                        │
//                                     stdout / --output ◄── render ─┤
//                                     stderr (tracing)  ◄── report ─┘

mod cli;
mod config;
mod output;

use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_palette::{builtin_names, generate_palette};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::PaletteConfig;

fn run(args: &Args) -> Result<()> {
    if args.list_presets {
        for name in builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let file_layer = match &args.config {
        Some(path) => PaletteConfig::load(path)?,
        None => PaletteConfig::default(),
    };
    let params = file_layer.overlay(args.overrides()).resolve()?;
    tracing::debug!(?params, "generation parameters");

    let generation = generate_palette(&params);
    if args.report {
        tracing::info!("palette diagnostics\n{}", generation.report);
    } else {
        tracing::debug!("palette diagnostics\n{}", generation.report);
    }

    let rendered = output::render(&generation.palette, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write palette to {}", path.display()))?;
            tracing::info!(path = %path.display(), "palette written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Build the stderr log filter.
///
/// `RUST_LOG` wins when set. Without it the level is `warn`, or `info` with
/// `--report`. `--report` also raises a quieter `RUST_LOG` to `info` so the
/// report is never filtered out.
fn log_filter(rust_log: Option<&str>, report: bool) -> EnvFilter {
    let fallback = if report { Level::INFO } else { Level::WARN };
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback.as_str()));

    if report && filter.max_level_hint().is_some_and(|max| max < LevelFilter::INFO) {
        filter.add_directive(Level::INFO.into())
    } else {
        filter
    }
}

fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout stays a clean palette.
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), args.report))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("lumen: {e:#}");
        process::exit(1);
    }
}
