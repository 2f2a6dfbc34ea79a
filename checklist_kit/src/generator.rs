//! # Checklist Generator
//!
//! Turns a host inventory into a firewall checklist. Every host with a
//! reachable address gets the fixed port list and a whitelist naming every
//! other reachable host. Hosts without an address are left out entirely.
//!
//! Generation is pure: no I/O, no logging, no shared state. Both loops walk
//! the inventory in identifier order, so the output is reproducible.

use std::collections::BTreeMap;

use crate::checklist::{ChecklistEntry, FirewallChecklist, PortRule, WhitelistRule};
use crate::inventory::HostInventory;

/// Two participants that map to the same checklist key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCollision {
    /// Shared address (quotes stripped)
    pub address: String,
    /// Identifier whose entry remains in the checklist
    pub kept: String,
    /// Identifier whose entry was overwritten
    pub dropped: String,
}

/// Remove every single-quote character from an address
pub fn strip_quotes(address: &str) -> String {
    address.replace('\'', "")
}

/// Build the firewall checklist for an inventory
///
/// Entries are keyed by the participant's address. When two participants
/// share an address the later one (by identifier) overwrites the earlier;
/// use [`find_address_collisions`] to surface that.
pub fn generate(inventory: &HostInventory) -> FirewallChecklist {
    let mut checklist = FirewallChecklist::new();

    for (identifier, host) in inventory.participants() {
        let entry = ChecklistEntry {
            ports: PortRule::required(),
            ip_whitelist: whitelist_for(inventory, identifier),
        };

        checklist
            .entries
            .insert(strip_quotes(&host.reachable_address), entry);
    }

    checklist
}

/// Every other participant, compared by identifier
fn whitelist_for(inventory: &HostInventory, identifier: &str) -> Vec<WhitelistRule> {
    inventory
        .participants()
        .filter(|(other, _)| *other != identifier)
        .map(|(other, host)| WhitelistRule::new(strip_quotes(&host.reachable_address), other))
        .collect()
}

/// Report participants whose checklist entry [`generate`] overwrites
///
/// One collision per dropped host. `kept` is always the last identifier at
/// that address, i.e. the entry that survives in the checklist. Results are
/// ordered by address, then by dropped identifier.
pub fn find_address_collisions(inventory: &HostInventory) -> Vec<AddressCollision> {
    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for (identifier, host) in inventory.participants() {
        groups
            .entry(strip_quotes(&host.reachable_address))
            .or_default()
            .push(identifier);
    }

    let mut collisions = Vec::new();
    for (address, identifiers) in groups {
        let Some((kept, dropped)) = identifiers.split_last() else {
            continue;
        };
        collisions.extend(dropped.iter().map(|dropped| AddressCollision {
            address: address.clone(),
            kept: kept.to_string(),
            dropped: dropped.to_string(),
        }));
    }

    collisions
}

/// Participants whose address is nothing but quote characters
///
/// These still take part in the checklist but end up under an empty key and
/// with an empty whitelist address once quotes are stripped.
pub fn find_blank_addresses(inventory: &HostInventory) -> Vec<String> {
    inventory
        .participants()
        .filter(|(_, host)| strip_quotes(&host.reachable_address).is_empty())
        .map(|(identifier, _)| identifier.to_string())
        .collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::HostRecord;
    use std::collections::BTreeSet;

    fn sample_inventory() -> HostInventory {
        HostInventory::new()
            .with_host("A", "1.1.1.1")
            .with_host("B", "2.2.2.2")
            .with_host("C", "")
    }

    fn large_inventory() -> HostInventory {
        (0..12)
            .map(|i| {
                let record = if i % 4 == 3 {
                    HostRecord::unreachable()
                } else {
                    HostRecord::new(format!("10.0.{}.{}", i / 4, i))
                };
                (format!("node-{:02}", i), record)
            })
            .collect()
    }

    #[test]
    fn test_example_scenario() {
        let checklist = generate(&sample_inventory());

        assert_eq!(checklist.len(), 2);
        assert_eq!(
            checklist.get("1.1.1.1").unwrap().ip_whitelist,
            vec![WhitelistRule::new("2.2.2.2", "B")]
        );
        assert_eq!(
            checklist.get("2.2.2.2").unwrap().ip_whitelist,
            vec![WhitelistRule::new("1.1.1.1", "A")]
        );
    }

    #[test]
    fn test_empty_inventory_yields_empty_checklist() {
        assert!(generate(&HostInventory::new()).is_empty());
    }

    #[test]
    fn test_single_participant_has_empty_whitelist() {
        let inventory = HostInventory::new().with_host("solo", "9.9.9.9");
        let checklist = generate(&inventory);

        let entry = checklist.get("9.9.9.9").unwrap();
        assert!(entry.ip_whitelist.is_empty());
        assert_eq!(entry.ports, PortRule::required());
    }

    #[test]
    fn test_unreachable_hosts_are_excluded() {
        let inventory = large_inventory();
        let checklist = generate(&inventory);

        let unreachable: Vec<&str> = inventory
            .hosts()
            .filter(|(_, h)| !h.is_reachable())
            .map(|(id, _)| id)
            .collect();
        assert_eq!(unreachable.len(), 3);
        assert_eq!(checklist.len(), 9);

        for entry in checklist.entries.values() {
            for id in &unreachable {
                assert!(!entry.peers().any(|peer| peer == *id));
            }
        }
    }

    #[test]
    fn test_whitelist_is_symmetric() {
        let inventory = large_inventory();
        let checklist = generate(&inventory);

        for (a, host_a) in inventory.participants() {
            for (b, host_b) in inventory.participants() {
                if a == b {
                    continue;
                }
                let a_lists_b = checklist
                    .get(&host_a.reachable_address)
                    .unwrap()
                    .peers()
                    .any(|peer| peer == b);
                let b_lists_a = checklist
                    .get(&host_b.reachable_address)
                    .unwrap()
                    .peers()
                    .any(|peer| peer == a);
                assert_eq!(a_lists_b, b_lists_a, "{} / {}", a, b);
                assert!(a_lists_b);
            }
        }
    }

    #[test]
    fn test_self_exclusion_and_completeness() {
        let inventory = large_inventory();
        let participants = inventory.participants().count();
        let checklist = generate(&inventory);

        for (id, host) in inventory.participants() {
            let entry = checklist.get(&host.reachable_address).unwrap();
            assert!(!entry.peers().any(|peer| peer == id));
            assert!(!entry
                .ip_whitelist
                .iter()
                .any(|rule| rule.address == host.reachable_address));
            assert_eq!(entry.ip_whitelist.len(), participants - 1);
        }
    }

    #[test]
    fn test_fixed_ports_regardless_of_host() {
        let checklist = generate(&large_inventory());
        let expected = vec![
            PortRule::new(2210, "archives"),
            PortRule::new(11625, "blockchain gossip protocol"),
        ];
        for entry in checklist.entries.values() {
            assert_eq!(entry.ports, expected);
        }
    }

    #[test]
    fn test_quotes_stripped_from_keys_and_whitelist() {
        let inventory = HostInventory::new()
            .with_host("quoted", "'10.0.0.5'")
            .with_host("trailing", "10.0.0.6'")
            .with_host("plain", "10.0.0.7");
        let checklist = generate(&inventory);

        assert!(checklist.entries.keys().all(|key| !key.contains('\'')));
        assert!(checklist.get("10.0.0.5").is_some());
        assert!(checklist.get("10.0.0.6").is_some());

        let plain = checklist.get("10.0.0.7").unwrap();
        assert_eq!(
            plain.ip_whitelist,
            vec![
                WhitelistRule::new("10.0.0.5", "quoted"),
                WhitelistRule::new("10.0.0.6", "trailing"),
            ]
        );
    }

    #[test]
    fn test_whitelist_in_identifier_order() {
        let inventory = HostInventory::new()
            .with_host("zulu", "3.3.3.3")
            .with_host("alpha", "1.1.1.1")
            .with_host("mike", "2.2.2.2");
        let checklist = generate(&inventory);

        let peers: Vec<&str> = checklist.get("3.3.3.3").unwrap().peers().collect();
        assert_eq!(peers, vec!["alpha", "mike"]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let inventory = large_inventory();
        assert_eq!(generate(&inventory), generate(&inventory.clone()));
    }

    #[test]
    fn test_shared_address_keeps_later_host_and_is_reported() {
        let inventory = HostInventory::new()
            .with_host("a", "10.0.0.1")
            .with_host("b", "'10.0.0.1'")
            .with_host("c", "10.0.0.3");
        let checklist = generate(&inventory);

        assert_eq!(checklist.len(), 2);
        let shared: BTreeSet<&str> = checklist.get("10.0.0.1").unwrap().peers().collect();
        assert_eq!(shared, BTreeSet::from(["a", "c"]));

        // both co-located hosts still appear in the third host's whitelist
        let third: Vec<&str> = checklist.get("10.0.0.3").unwrap().peers().collect();
        assert_eq!(third, vec!["a", "b"]);

        assert_eq!(
            find_address_collisions(&inventory),
            vec![AddressCollision {
                address: "10.0.0.1".to_string(),
                kept: "b".to_string(),
                dropped: "a".to_string(),
            }]
        );
    }

    #[test]
    fn test_three_hosts_sharing_an_address_all_name_the_surviving_entry() {
        let inventory = HostInventory::new()
            .with_host("a", "10.0.0.1")
            .with_host("b", "10.0.0.1")
            .with_host("c", "'10.0.0.1'")
            .with_host("d", "10.0.0.4");
        let checklist = generate(&inventory);

        let shared: Vec<&str> = checklist.get("10.0.0.1").unwrap().peers().collect();
        assert_eq!(shared, vec!["a", "b", "d"]);

        let collision = |dropped: &str| AddressCollision {
            address: "10.0.0.1".to_string(),
            kept: "c".to_string(),
            dropped: dropped.to_string(),
        };
        assert_eq!(
            find_address_collisions(&inventory),
            vec![collision("a"), collision("b")]
        );
    }

    #[test]
    fn test_collisions_ordered_by_address() {
        let inventory = HostInventory::new()
            .with_host("a", "10.0.0.9")
            .with_host("b", "10.0.0.1")
            .with_host("c", "10.0.0.9")
            .with_host("d", "10.0.0.1");

        let addresses: Vec<(String, String)> = find_address_collisions(&inventory)
            .into_iter()
            .map(|c| (c.address, c.kept))
            .collect();
        assert_eq!(
            addresses,
            vec![
                ("10.0.0.1".to_string(), "d".to_string()),
                ("10.0.0.9".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_quote_only_address_is_flagged_but_still_participates() {
        let inventory = HostInventory::new()
            .with_host("q", "''")
            .with_host("r", "1.1.1.1")
            .with_host("s", "");
        let checklist = generate(&inventory);

        let keys: Vec<&str> = checklist.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["", "1.1.1.1"]);
        assert_eq!(find_blank_addresses(&inventory), vec!["q".to_string()]);
    }

    #[test]
    fn test_no_blank_addresses_in_regular_inventory() {
        assert!(find_blank_addresses(&large_inventory()).is_empty());
        assert!(find_blank_addresses(&sample_inventory()).is_empty());
    }

    #[test]
    fn test_no_collisions_for_distinct_addresses() {
        assert!(find_address_collisions(&large_inventory()).is_empty());
        assert!(find_address_collisions(&sample_inventory()).is_empty());
    }
}
