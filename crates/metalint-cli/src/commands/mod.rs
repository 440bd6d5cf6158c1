//! CLI command implementations.

pub mod config;
pub mod inspect;

use std::fs;
use std::path::Path;

use metalint::{ConfigStore, MetalintError, StandardKind};
use serde_json::Value;

/// Read a file, keeping the path in the error.
pub(crate) fn read_file(path: &Path) -> metalint::Result<Vec<u8>> {
    fs::read(path).map_err(|source| MetalintError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Default configuration of a standard with the overrides of `path` applied.
pub(crate) fn load_config(
    standard: StandardKind,
    path: Option<&Path>,
) -> metalint::Result<ConfigStore> {
    let mut config = standard.default_config();
    if let Some(path) = path {
        let overrides: Value = serde_json::from_slice(&read_file(path)?)?;
        config.apply_overrides(&overrides)?;
        tracing::info!(path = %path.display(), "applied configuration overrides");
    }
    Ok(config)
}
