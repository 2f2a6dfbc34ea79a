//! # Firewall Checklist Model
//!
//! Structured checklist values. Rules keep their value and comment apart so
//! the generator's output can be inspected directly; the annotated
//! `"<value> # <comment>"` form only appears through `Display` at render time.

use std::collections::BTreeMap;
use std::fmt;

/// Port that every validator must expose for history archives
pub const ARCHIVES_PORT: u16 = 2210;

/// Port used by the blockchain gossip (overlay) protocol
pub const GOSSIP_PORT: u16 = 11625;

/// One port that must be open, with a human-readable purpose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRule {
    pub port: u16,
    pub comment: String,
}

impl PortRule {
    pub fn new(port: u16, comment: impl Into<String>) -> Self {
        Self {
            port,
            comment: comment.into(),
        }
    }

    /// The port list required on every participant
    pub fn required() -> Vec<PortRule> {
        vec![
            PortRule::new(ARCHIVES_PORT, "archives"),
            PortRule::new(GOSSIP_PORT, "blockchain gossip protocol"),
        ]
    }
}

impl fmt::Display for PortRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} # {}", self.port, self.comment)
    }
}

/// One peer address to allow, annotated with the peer's host identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistRule {
    pub address: String,
    pub comment: String,
}

impl WhitelistRule {
    pub fn new(address: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            comment: comment.into(),
        }
    }
}

impl fmt::Display for WhitelistRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} # {}", self.address, self.comment)
    }
}

/// Firewall rules for a single participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub ports: Vec<PortRule>,
    pub ip_whitelist: Vec<WhitelistRule>,
}

impl ChecklistEntry {
    /// Iterate the identifiers of the whitelisted peers
    pub fn peers(&self) -> impl Iterator<Item = &str> {
        self.ip_whitelist.iter().map(|rule| rule.comment.as_str())
    }
}

/// Checklist for one inventory, keyed by participant address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirewallChecklist {
    pub entries: BTreeMap<String, ChecklistEntry>,
}

impl FirewallChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, address: &str) -> Option<&ChecklistEntry> {
        self.entries.get(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
