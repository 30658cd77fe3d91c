//! Command-line argument definitions for the Cartograph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the model snapshot, the project root the
//! reports are written under, generator selection, configuration file and
//! logging verbosity.

use clap::Parser;

use cartograph::generator::GeneratorKind;

/// Command-line arguments for the Cartograph report tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the model snapshot (TOML)
    #[arg(help = "Path to the model snapshot")]
    pub input: String,

    /// Project root that report paths are relative to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Generators to run (relationships-csv, product-components-csv); all when omitted
    #[arg(short, long = "generator")]
    pub generators: Vec<GeneratorKind>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Generators selected on the command line, or every generator.
    pub fn selected_generators(&self) -> Vec<GeneratorKind> {
        if self.generators.is_empty() {
            GeneratorKind::ALL.to_vec()
        } else {
            self.generators.clone()
        }
    }
}
