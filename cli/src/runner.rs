//! Checklist run
//!
//! Reads each inventory document, generates its checklist and writes the
//! rendered YAML to the document's destination.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use checklist_kit::{
    find_address_collisions, find_blank_addresses, generate, parse_inventory, render_yaml,
    ChecklistError,
};
use thiserror::Error;

use crate::config::{Destination, DocumentReport, OutputTarget, RunConfig, RunSummary};
use crate::discovery::{self, DiscoveryError};
use crate::output::{self, OutputError};

/// Failure while processing one inventory document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ChecklistError,
    },

    #[error("Failed to render checklist for {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: ChecklistError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Errors that stop a run
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Report(#[from] OutputError),
}

/// Run checklist generation for every discovered inventory
///
/// Without `keep_going` the first failing document aborts the run. With it,
/// failures are recorded in the summary and the remaining documents are
/// still processed.
pub fn run(config: &RunConfig) -> Result<RunSummary, RunError> {
    let start = Instant::now();

    let inventories = discovery::discover_inventories(&config.input)?;

    if let OutputTarget::Directory(dir) = &config.output {
        std::fs::create_dir_all(dir).map_err(|e| RunError::OutputDirCreation {
            path: dir.clone(),
            source: e,
        })?;
    }

    log::info!("Processing {} inventory file(s)", inventories.len());
    if !config.quiet {
        output::print_banner(inventories.len());
    }

    let mut documents = Vec::with_capacity(inventories.len());

    for (index, input) in inventories.iter().enumerate() {
        let destination = config.output.destination_for(input);
        let report = match process_document(input, &destination) {
            Ok(report) => report,
            Err(e) if !config.keep_going => return Err(RunError::Document(e)),
            Err(e) => {
                log::error!("{}", e);
                DocumentReport {
                    input: input.clone(),
                    destination,
                    entries: 0,
                    collisions: Vec::new(),
                    blank_addresses: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        };

        if !config.quiet {
            output::print_progress(index + 1, inventories.len(), &report);
        }
        documents.push(report);
    }

    let summary = RunSummary::new(documents, start.elapsed());

    if let Some(report_path) = &config.report_file {
        output::write_report(&summary, report_path)?;
        log::info!("Run report saved to {}", report_path.display());
    }

    if !config.quiet {
        output::print_summary(&summary, config.report_file.as_deref());
    }

    log::info!(
        "Run completed: {} written, {} failed, {} address collision(s)",
        summary.written(),
        summary.failed(),
        summary.collisions()
    );

    Ok(summary)
}

/// Read, generate, render and write one inventory document
fn process_document(
    input: &Path,
    destination: &Destination,
) -> Result<DocumentReport, DocumentError> {
    log::debug!("Checking hosts file: {}", input.display());

    let text = std::fs::read_to_string(input).map_err(|e| DocumentError::Read {
        path: input.to_path_buf(),
        source: e,
    })?;

    let inventory = parse_inventory(&text).map_err(|e| DocumentError::Parse {
        path: input.to_path_buf(),
        source: e,
    })?;

    let checklist = generate(&inventory);
    let collisions = find_address_collisions(&inventory);
    for collision in &collisions {
        log::warn!(
            "{}: host '{}' shares address {} with '{}'; only '{}' is kept",
            input.display(),
            collision.dropped,
            collision.address,
            collision.kept,
            collision.kept
        );
    }

    let blank_addresses = find_blank_addresses(&inventory);
    for identifier in &blank_addresses {
        log::warn!(
            "{}: host '{}' has an address made only of quotes; its entry has an empty key",
            input.display(),
            identifier
        );
    }

    let yaml = render_yaml(&checklist).map_err(|e| DocumentError::Render {
        path: input.to_path_buf(),
        source: e,
    })?;

    write_checklist(&yaml, destination)?;
    log::debug!("Firewall checklist written to {}", destination);

    Ok(DocumentReport {
        input: input.to_path_buf(),
        destination: destination.clone(),
        entries: checklist.len(),
        collisions,
        blank_addresses,
        error: None,
    })
}

fn write_checklist(yaml: &str, destination: &Destination) -> Result<(), DocumentError> {
    match destination {
        Destination::File(path) => std::fs::write(path, yaml).map_err(|e| DocumentError::Write {
            path: path.clone(),
            source: e,
        }),
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(yaml.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(DocumentError::Stdout)
        }
    }
}
