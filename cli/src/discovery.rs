//! Inventory discovery
//!
//! Finds the inventory documents to process for a run.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::InputSource;

/// Errors that can occur during inventory discovery
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to read directory {0}: {1}")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to read entry in {0}: {1}")]
    ReadEntry(PathBuf, #[source] std::io::Error),
}

/// Discover all inventory documents for an input source
///
/// A single file is returned as is. For a hosts folder every regular file
/// directly inside it is an inventory, whatever its extension;
/// subdirectories are skipped. Results are sorted by path.
pub fn discover_inventories(input: &InputSource) -> Result<Vec<PathBuf>, DiscoveryError> {
    match input {
        InputSource::SingleFile(path) => Ok(vec![path.clone()]),
        InputSource::HostsDir(dir) => discover_in_directory(dir),
    }
}

fn discover_in_directory(dir_path: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut inventories = Vec::new();

    let entries = std::fs::read_dir(dir_path)
        .map_err(|e| DiscoveryError::ReadDir(dir_path.to_path_buf(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::ReadEntry(dir_path.to_path_buf(), e))?;
        let path = entry.path();

        if path.is_file() {
            inventories.push(path);
        } else {
            log::debug!("Skipping non-file entry {}", path.display());
        }
    }

    inventories.sort();
    Ok(inventories)
}
