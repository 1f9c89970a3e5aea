//! Command-line interface for the floating text demo
//!
//! Supports both graphical (default) and headless modes.

use clap::Parser;
use std::path::PathBuf;

/// Floating combat text and rarity color demo
#[derive(Parser, Debug)]
#[command(name = "floattext")]
#[command(about = "Pooled floating combat text demo")]
#[command(version)]
pub struct Args {
    /// Run in headless mode with the specified JSON scenario file
    #[arg(long, value_name = "SCENARIO_FILE")]
    pub headless: Option<PathBuf>,

    /// Output path for the scenario report JSON (headless mode only)
    #[arg(long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Simulated frames per second, overriding the scenario value (headless mode only)
    #[arg(long)]
    pub fps: Option<f32>,
}

pub fn parse_args() -> Args {
    Args::parse()
}
