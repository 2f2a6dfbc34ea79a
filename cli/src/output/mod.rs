//! Output generation module
//!
//! - Console (human-readable progress and summary, on stderr)
//! - Run report (JSON, written with `--report`)
//!
//! Checklists themselves are written by the runner; stdout is reserved for
//! them so that `--stdout` and single-file mode produce clean YAML.

mod console;
mod summary;

pub use console::{print_banner, print_progress, print_summary};
pub use summary::build_report;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::RunSummary;

/// Serialize the run report and write it to `path`
pub fn write_report(summary: &RunSummary, path: &Path) -> Result<(), OutputError> {
    let report = build_report(summary);
    let json = serde_json::to_string_pretty(&report)?;

    std::fs::write(path, json).map_err(|e| OutputError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Errors that can occur while writing the run report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize run report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write run report {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
