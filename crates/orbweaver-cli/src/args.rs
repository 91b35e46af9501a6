//! Command-line argument definitions for the Orbweaver CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the layout run, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Orbweaver layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input GML file
    #[arg(help = "Path to the input GML file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "layout.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for the initial placement; omit for a random layout
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Upper bound on simulation iterations
    #[arg(long, default_value_t = 100_000)]
    pub max_iterations: u32,

    /// Also write final node positions as JSON to this path
    #[arg(long)]
    pub positions: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
