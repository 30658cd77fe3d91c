//! CLI logic for the Cartograph report tool.
//!
//! This module loads configuration and the model snapshot, then runs each
//! selected generator against a [`FileSink`] rooted at the output directory.

pub mod error_adapter;
pub mod model;

mod args;
mod config;

pub use args::Args;

use log::{info, warn};
use thiserror::Error;

use cartograph::{CartographError, ReportBuilder, sink::FileSink};

/// Failures collected during one CLI run.
///
/// Generators run independently: a failure in one does not prevent the
/// others from running.
#[derive(Debug, Error)]
#[error("{} report generation step(s) failed", .failures.len())]
pub struct RunError {
    failures: Vec<CartographError>,
}

impl RunError {
    /// Create a run error from its failures.
    pub fn new(failures: Vec<CartographError>) -> Self {
        Self { failures }
    }

    /// Get every failure, in the order they occurred.
    pub fn failures(&self) -> &[CartographError] {
        &self.failures
    }
}

impl From<CartographError> for RunError {
    fn from(err: CartographError) -> Self {
        Self::new(vec![err])
    }
}

/// Run the Cartograph CLI application
///
/// This function loads the model snapshot and writes every selected report
/// below the output directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RunError` for:
/// - Configuration loading errors
/// - Snapshot read or parse errors
/// - Generator aborts
/// - Report write errors
pub fn run(args: &Args) -> Result<(), RunError> {
    info!(
        input_path = args.input,
        output_dir = args.output_dir;
        "Generating reports"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    if let Some(name) = app_config.project().name() {
        info!(project = name, title = app_config.project().title().unwrap_or(name); "Project");
    }

    let model = model::load_model(&args.input)?;

    let builder = ReportBuilder::new(app_config);
    let mut sink = FileSink::new(&args.output_dir);

    let mut failures = Vec::new();
    for kind in args.selected_generators() {
        if let Err(err) = builder.generate(kind, &model, &mut sink) {
            warn!(generator = kind.name(), error = err.to_string(); "Generator failed");
            failures.push(err);
        }
    }

    if failures.is_empty() {
        info!(output_dir = args.output_dir; "Reports generated");
        Ok(())
    } else {
        Err(RunError::new(failures))
    }
}
