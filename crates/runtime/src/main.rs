#![deny(clippy::all, clippy::pedantic)]

//! # Cubebox Runtime
//!
//! Headless driver for the cube physics engine. It builds the two-cube demo
//! scene, applies any scripted input from the command line, and steps the
//! simulation while logging progress.

mod app;
mod config;

use anyhow::Result;
use clap::Parser;

use crate::config::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    app::run(&args.validated()?)
}

/// Log to stdout, filtered by `RUST_LOG` and defaulting to `info`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
