// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Pathwright: a vector path editing engine
//!
//! The engine keeps a path's commands, its on-screen control handles and its
//! bounding geometry consistent under any object transform. It is driven by
//! a host through the `host::Host` trait; `canvas::Canvas` is an in-memory
//! host used by the tests and by the `pathwright` script runner.

pub mod canvas;
pub mod editing;
pub mod editor;
pub mod host;
pub mod model;
pub mod path;
pub mod script;
pub mod settings;
pub mod theme;
pub mod tools;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Entry point for the `pathwright` script runner
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathwright=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => settings::Settings::load(path)?,
        None => settings::Settings::default(),
    };

    let script = script::Script::load(&args.script)?;
    let mut editor = editor::Editor::new(settings);
    let mut canvas = canvas::Canvas::new();
    script.run(&mut editor, &mut canvas)?;

    if let Some(path) = &args.svg {
        std::fs::write(path, canvas.to_svg())
            .with_context(|| format!("Failed to write SVG to {:?}", path))?;
        tracing::info!("Wrote {}", path.display());
    }

    let report = script::Report::new(&editor, &canvas)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Replay an event script against an in-memory canvas and print the result
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pathwright", version, about)]
struct Args {
    /// JSON event script to replay
    script: PathBuf,

    /// TOML settings overriding the compiled-in defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write an SVG debug rendering of the final canvas
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,
}
