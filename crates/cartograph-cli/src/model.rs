//! Model snapshot loading.

use std::{fs, path::Path};

use log::{debug, info};

use cartograph::{CartographError, graph::Model, snapshot::Snapshot};

/// Read and parse a TOML model snapshot.
///
/// # Errors
///
/// Returns [`CartographError::Snapshot`] with the offending span for TOML
/// errors, and [`CartographError::Model`] if the snapshot is inconsistent.
pub fn load_model(path: impl AsRef<Path>) -> Result<Model, CartographError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading model snapshot");

    let source = fs::read_to_string(path)?;
    let model = parse_model(&source)?;

    debug!(
        elements = model.element_count(),
        relationships = model.relationship_count();
        "Model snapshot loaded"
    );

    Ok(model)
}

/// Parse a TOML model snapshot held in memory.
///
/// # Errors
///
/// See [`load_model`].
pub fn parse_model(source: &str) -> Result<Model, CartographError> {
    let snapshot: Snapshot = toml::from_str(source).map_err(|err| {
        CartographError::new_snapshot_error(err.message(), err.span(), source)
    })?;

    Ok(Model::try_from(snapshot)?)
}
