//! # YAML Renderer
//!
//! Serializes a checklist into the `firewall-checklist` document:
//!
//! ```text
//! firewall-checklist:
//!   validator-nodes:
//!     10.0.0.1:
//!       ports:
//!       - 2210 # archives
//!       - 11625 # blockchain gossip protocol
//!       ip-whitelist:
//!       - 10.0.0.2 # validator-2
//! ```
//!
//! Rules are serialized as annotated strings. The YAML emitter single-quotes
//! any string containing `" #"`, so every `'` is stripped from the final text
//! and the annotation reads as a YAML comment.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::checklist::{ChecklistEntry, FirewallChecklist};
use crate::error::{ChecklistError, Result};
use crate::generator::strip_quotes;

#[derive(Serialize)]
struct ChecklistDocument<'a> {
    #[serde(rename = "firewall-checklist")]
    firewall: FirewallSection<'a>,
}

#[derive(Serialize)]
struct FirewallSection<'a> {
    #[serde(rename = "validator-nodes")]
    validator_nodes: BTreeMap<&'a str, NodeDocument>,
}

#[derive(Serialize)]
struct NodeDocument {
    ports: Vec<String>,
    #[serde(rename = "ip-whitelist")]
    ip_whitelist: Vec<String>,
}

impl From<&ChecklistEntry> for NodeDocument {
    fn from(entry: &ChecklistEntry) -> Self {
        Self {
            ports: entry.ports.iter().map(ToString::to_string).collect(),
            ip_whitelist: entry.ip_whitelist.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Render a checklist as a YAML document with all quote characters removed
pub fn render_yaml(checklist: &FirewallChecklist) -> Result<String> {
    let document = ChecklistDocument {
        firewall: FirewallSection {
            validator_nodes: checklist
                .entries
                .iter()
                .map(|(address, entry)| (address.as_str(), NodeDocument::from(entry)))
                .collect(),
        },
    };

    let yaml =
        serde_yaml::to_string(&document).map_err(|source| ChecklistError::Render { source })?;

    Ok(strip_quotes(&yaml))
}
