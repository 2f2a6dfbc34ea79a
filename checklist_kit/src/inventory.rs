//! # Host Inventory
//!
//! Host inventory model and the parser for Ansible YAML inventories.
//!
//! Only the fields needed for checklist generation are kept. Everything else
//! an inventory carries (seeds, keys, users, storage paths, provider flags) is
//! skipped during deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::error::{ChecklistError, Result};

/// Per-host attributes relevant to the checklist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    /// Address peers use to reach this host (`ansible_host`).
    /// Empty means the host does not take part in the checklist.
    pub reachable_address: String,
}

impl HostRecord {
    /// Create a record for a host reachable at `address`
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            reachable_address: address.into(),
        }
    }

    /// Create a record for a host without an address
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Whether this host participates in the checklist
    pub fn is_reachable(&self) -> bool {
        !self.reachable_address.is_empty()
    }
}

/// Hosts of one inventory document, ordered by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInventory {
    hosts: BTreeMap<String, HostRecord>,
}

impl HostInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a host, replacing any previous record with the same identifier
    pub fn insert(&mut self, identifier: impl Into<String>, record: HostRecord) {
        self.hosts.insert(identifier.into(), record);
    }

    /// Builder-style variant of [`HostInventory::insert`]
    pub fn with_host(mut self, identifier: impl Into<String>, address: impl Into<String>) -> Self {
        self.insert(identifier, HostRecord::new(address));
        self
    }

    /// Look up a host by identifier
    pub fn get(&self, identifier: &str) -> Option<&HostRecord> {
        self.hosts.get(identifier)
    }

    /// All hosts in identifier order
    pub fn hosts(&self) -> impl Iterator<Item = (&str, &HostRecord)> {
        self.hosts.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Hosts with a non-empty reachable address, in identifier order
    pub fn participants(&self) -> impl Iterator<Item = (&str, &HostRecord)> {
        self.hosts().filter(|(_, record)| record.is_reachable())
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, HostRecord)> for HostInventory {
    fn from_iter<I: IntoIterator<Item = (K, HostRecord)>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for (identifier, record) in iter {
            inventory.insert(identifier, record);
        }
        inventory
    }
}

// ============================================================================
// Document shape
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct InventoryDocument {
    #[serde(default)]
    all: Option<GroupDocument>,
}

#[derive(Debug, Default, Deserialize)]
struct GroupDocument {
    #[serde(default)]
    hosts: Option<BTreeMap<String, Option<HostDocument>>>,
}

#[derive(Debug, Default, Deserialize)]
struct HostDocument {
    #[serde(default, deserialize_with = "scalar_to_string")]
    ansible_host: String,
}

/// Accept any scalar for an address; null and collections read as empty
fn scalar_to_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => String::new(),
    })
}

/// Documents with nothing but whitespace and comments hold no hosts
fn is_blank_document(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

/// Parse an Ansible YAML inventory (`all.hosts.<id>.ansible_host`)
///
/// Missing sections and hosts without a body yield empty values rather than
/// errors. Only YAML syntax errors and structural mismatches fail.
pub fn parse_inventory(text: &str) -> Result<HostInventory> {
    if is_blank_document(text) {
        log::debug!("Inventory document is empty");
        return Ok(HostInventory::new());
    }

    let document: Option<InventoryDocument> =
        serde_yaml::from_str(text).map_err(|source| ChecklistError::InventoryParse { source })?;

    let hosts = document
        .and_then(|doc| doc.all)
        .and_then(|group| group.hosts)
        .unwrap_or_default();

    let inventory: HostInventory = hosts
        .into_iter()
        .map(|(identifier, host)| {
            let address = host.map(|h| h.ansible_host).unwrap_or_default();
            (identifier, HostRecord::new(address))
        })
        .collect();

    log::debug!(
        "Parsed inventory: {} host(s), {} reachable",
        inventory.len(),
        inventory.participants().count()
    );

    Ok(inventory)
}

#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#[cfg(test)]
mod tests {
    use super::*;

    const VALIDATORS: &str = r#"
all:
  hosts:
    validator-1:
      ansible_host: 10.0.0.1
      node_seed: SXXXX
      node_pubkey: GXXXX
      is_hosted_on_azure: false
      ansible_user: ubuntu
      postgres_path: /var/lib/postgresql
      postgres_mount_path: /mnt/pg
    validator-2:
      ansible_host: '10.0.0.2'
    bastion:
      ansible_user: admin
"#;

    #[test]
    fn test_parse_reads_ansible_host_and_ignores_other_fields() {
        let inventory = parse_inventory(VALIDATORS).expect("parse failed");

        assert_eq!(inventory.len(), 3);
        assert_eq!(
            inventory.get("validator-1"),
            Some(&HostRecord::new("10.0.0.1"))
        );
        assert_eq!(
            inventory.get("validator-2"),
            Some(&HostRecord::new("10.0.0.2"))
        );
        assert_eq!(inventory.get("bastion"), Some(&HostRecord::unreachable()));
    }

    #[test]
    fn test_hosts_iterate_in_identifier_order() {
        let inventory = parse_inventory(VALIDATORS).unwrap();
        let ids: Vec<&str> = inventory.hosts().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["bastion", "validator-1", "validator-2"]);

        let participants: Vec<&str> = inventory.participants().map(|(id, _)| id).collect();
        assert_eq!(participants, vec!["validator-1", "validator-2"]);
    }

    #[test]
    fn test_embedded_quotes_are_preserved_by_parser() {
        let yaml = "all:\n  hosts:\n    a:\n      ansible_host: \"10.0.0.5'\"\n";
        let inventory = parse_inventory(yaml).unwrap();
        assert_eq!(inventory.get("a").unwrap().reachable_address, "10.0.0.5'");
    }

    #[test]
    fn test_non_string_scalars_are_stringified() {
        let yaml = "all:\n  hosts:\n    a:\n      ansible_host: 42\n    b:\n      ansible_host:\n";
        let inventory = parse_inventory(yaml).unwrap();
        assert_eq!(inventory.get("a").unwrap().reachable_address, "42");
        assert!(!inventory.get("b").unwrap().is_reachable());
    }

    #[test]
    fn test_host_without_body() {
        let inventory = parse_inventory("all:\n  hosts:\n    lonely:\n").unwrap();
        assert_eq!(inventory.len(), 1);
        assert!(!inventory.get("lonely").unwrap().is_reachable());
    }

    #[test]
    fn test_missing_sections_yield_empty_inventory() {
        assert!(parse_inventory("").unwrap().is_empty());
        assert!(parse_inventory("   \n# only a comment\n").unwrap().is_empty());
        assert!(parse_inventory("all:\n").unwrap().is_empty());
        assert!(parse_inventory("all:\n  vars:\n    x: 1\n").unwrap().is_empty());
        assert!(parse_inventory("other_group:\n  hosts: {}\n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let result = parse_inventory("all:\n  hosts: [\n");
        assert!(matches!(result, Err(ChecklistError::InventoryParse { .. })));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = parse_inventory("all:\n  hosts:\n    - a\n    - b\n");
        assert!(matches!(result, Err(ChecklistError::InventoryParse { .. })));
    }

    #[test]
    fn test_from_iterator_and_builder_agree() {
        let built = HostInventory::new()
            .with_host("a", "1.1.1.1")
            .with_host("b", "");
        let collected: HostInventory = vec![
            ("b", HostRecord::unreachable()),
            ("a", HostRecord::new("1.1.1.1")),
        ]
        .into_iter()
        .collect();
        assert_eq!(built, collected);
    }
}
