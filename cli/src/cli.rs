//! Command-line interface parsing
//!
//! Handles argument parsing and turns the arguments into a validated
//! [`RunConfig`].

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::{InputSource, OutputTarget, RunConfig, HOSTS_DIR_NAME, OUTPUT_DIR_NAME};

/// Creates a firewall checklist for the hosts in the hosts folder
#[derive(Parser, Debug)]
#[command(name = "firewall-checklist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the ansible directory
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Process a single inventory file instead of the hosts folder
    #[arg(short, long, conflicts_with = "stdout")]
    pub file: Option<PathBuf>,

    /// Write the checklist for --file here instead of stdout
    #[arg(short, long, requires = "file")]
    pub output: Option<PathBuf>,

    /// Print checklists to stdout instead of writing the checklist folder
    #[arg(long)]
    pub stdout: bool,

    /// Continue with the remaining documents after a failure
    #[arg(short, long)]
    pub keep_going: bool,

    /// Write a JSON run report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Problems with the requested paths
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("hosts folder does not exist: {0}")]
    HostsDirMissing(PathBuf),

    #[error("inventory file not found: {0}")]
    InputFileMissing(PathBuf),
}

impl Cli {
    /// Validate paths and build the run configuration
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        let (input, output) = match self.file {
            Some(file) => {
                if !file.is_file() {
                    return Err(ConfigError::InputFileMissing(file));
                }
                let output = match self.output {
                    Some(path) => OutputTarget::File(path),
                    None => OutputTarget::Stdout,
                };
                (InputSource::SingleFile(file), output)
            }
            None => {
                let hosts_dir = self.path.join(HOSTS_DIR_NAME);
                if !hosts_dir.is_dir() {
                    return Err(ConfigError::HostsDirMissing(hosts_dir));
                }
                let output = if self.stdout {
                    OutputTarget::Stdout
                } else {
                    OutputTarget::Directory(self.path.join(OUTPUT_DIR_NAME))
                };
                (InputSource::HostsDir(hosts_dir), output)
            }
        };

        Ok(RunConfig {
            input,
            output,
            keep_going: self.keep_going,
            quiet: self.quiet,
            report_file: self.report,
        })
    }
}
