//! Run report builder
//!
//! Builds the JSON report with per-document outcomes and totals.

use crate::config::{DocumentReport, RunSummary};

/// Build the JSON report for a finished run
pub fn build_report(summary: &RunSummary) -> serde_json::Value {
    let documents: Vec<serde_json::Value> =
        summary.documents.iter().map(build_document_report).collect();

    serde_json::json!({
        "tool": {
            "name": "firewall-checklist",
            "version": env!("CARGO_PKG_VERSION")
        },
        "summary": {
            "total_documents": summary.total_documents(),
            "written": summary.written(),
            "failed": summary.failed(),
            "collisions": summary.collisions(),
            "duration_ms": summary.duration.as_millis() as u64
        },
        "documents": documents
    })
}

/// Build the report for a single document
fn build_document_report(document: &DocumentReport) -> serde_json::Value {
    let collisions: Vec<serde_json::Value> = document
        .collisions
        .iter()
        .map(|c| {
            serde_json::json!({
                "address": c.address,
                "kept": c.kept,
                "dropped": c.dropped
            })
        })
        .collect();

    let status = if document.succeeded() {
        "written"
    } else {
        "failed"
    };

    let mut report = serde_json::json!({
        "input": document.input.display().to_string(),
        "destination": document.destination.to_string(),
        "status": status,
        "entries": document.entries,
        "collisions": collisions,
        "blank_addresses": document.blank_addresses
    });

    if let (Some(error), Some(map)) = (&document.error, report.as_object_mut()) {
        map.insert("error".to_string(), serde_json::Value::from(error.as_str()));
    }

    report
}
