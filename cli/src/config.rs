//! Configuration types for a checklist run
//!
//! Defines the run configuration built from the command line and the
//! per-document and per-run results reported back to the user.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use checklist_kit::AddressCollision;

/// Inventory folder inside the Ansible directory
pub const HOSTS_DIR_NAME: &str = "hosts";

/// Checklist folder created next to the inventory folder
pub const OUTPUT_DIR_NAME: &str = "firewall-checklist";

/// Where inventory documents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Every file directly under this hosts folder
    HostsDir(PathBuf),
    /// A single inventory file
    SingleFile(PathBuf),
}

/// Where rendered checklists go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One file per input, same file name, inside this folder
    Directory(PathBuf),
    /// Exactly this file (single-file mode)
    File(PathBuf),
    /// Standard output
    Stdout,
}

impl OutputTarget {
    /// Resolve the destination for one input document
    pub fn destination_for(&self, input: &Path) -> Destination {
        match self {
            OutputTarget::Directory(dir) => {
                let name = input.file_name().unwrap_or(input.as_os_str());
                Destination::File(dir.join(name))
            }
            OutputTarget::File(path) => Destination::File(path.clone()),
            OutputTarget::Stdout => Destination::Stdout,
        }
    }
}

/// Resolved destination of a single checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Configuration for a checklist run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Inventory source
    pub input: InputSource,

    /// Checklist destination
    pub output: OutputTarget,

    /// Continue with remaining documents after a failure
    pub keep_going: bool,

    /// Suppress progress output
    pub quiet: bool,

    /// JSON run report path (None means no report)
    pub report_file: Option<PathBuf>,
}

/// Outcome of one inventory document
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub input: PathBuf,
    pub destination: Destination,

    /// Number of checklist entries written
    pub entries: usize,

    /// Participants that shared an address with another participant
    pub collisions: Vec<AddressCollision>,

    /// Participants whose address is empty once quotes are stripped
    pub blank_addresses: Vec<String>,

    /// Failure message, if the document could not be processed
    pub error: Option<String>,
}

impl DocumentReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a checklist run
#[derive(Debug)]
pub struct RunSummary {
    /// Per-document outcomes, in processing order
    pub documents: Vec<DocumentReport>,

    /// Total run duration
    pub duration: Duration,
}

impl RunSummary {
    pub fn new(documents: Vec<DocumentReport>, duration: Duration) -> Self {
        Self {
            documents,
            duration,
        }
    }

    pub fn total_documents(&self) -> usize {
        self.documents.len()
    }

    pub fn written(&self) -> usize {
        self.documents.iter().filter(|d| d.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.total_documents() - self.written()
    }

    pub fn collisions(&self) -> usize {
        self.documents.iter().map(|d| d.collisions.len()).sum()
    }

    /// Get the exit code based on results
    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 {
            1
        } else {
            0
        }
    }
}
