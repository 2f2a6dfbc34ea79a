//! Console output formatting
//!
//! Progress and summary lines for a checklist run. Everything goes to
//! stderr; stdout carries checklist YAML only.

use std::path::Path;

use crate::config::{DocumentReport, RunSummary};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

const RULE: &str =
    "────────────────────────────────────────────────────────────────────────────────";

/// Print the run header
pub fn print_banner(file_count: usize) {
    eprintln!();
    eprintln!("Firewall Checklist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("Checking {} hosts file(s)...", file_count);
    eprintln!();
}

/// Print the progress line for one processed document
pub fn print_progress(num: usize, total: usize, report: &DocumentReport) {
    match &report.error {
        None => {
            eprintln!(
                "[{}/{}] {}✓{} {} -> {} ({} node(s))",
                num,
                total,
                GREEN,
                RESET,
                report.input.display(),
                report.destination,
                report.entries
            );
            for collision in &report.collisions {
                eprintln!(
                    "        {}!{} {} shared by {} and {}, kept {}",
                    YELLOW,
                    RESET,
                    collision.address,
                    collision.dropped,
                    collision.kept,
                    collision.kept
                );
            }
            for identifier in &report.blank_addresses {
                eprintln!(
                    "        {}!{} {} has an empty address after quote stripping",
                    YELLOW, RESET, identifier
                );
            }
        }
        Some(error) => {
            eprintln!(
                "[{}/{}] {}✗{} {} (ERROR: {})",
                num,
                total,
                RED,
                RESET,
                report.input.display(),
                error
            );
        }
    }
}

/// Print the closing summary block
pub fn print_summary(summary: &RunSummary, report_file: Option<&Path>) {
    eprintln!();
    eprintln!("{}", RULE);
    eprintln!("  Documents:    {}", summary.total_documents());
    eprintln!("  Written:      {}", summary.written());
    if summary.failed() > 0 {
        eprintln!("  Failed:       {}{}{}", RED, summary.failed(), RESET);
    }
    if summary.collisions() > 0 {
        eprintln!("  Collisions:   {}{}{}", YELLOW, summary.collisions(), RESET);
    }
    eprintln!("  Duration:     {:.2}s", summary.duration.as_secs_f64());
    if let Some(path) = report_file {
        eprintln!("  Report:       {}", path.display());
    }
    eprintln!("{}", RULE);
    eprintln!();
}
