//! # Checklist Kit
//!
//! Firewall checklist generation for validator host inventories.
//! Provides the inventory parser, the checklist data model, the generator and
//! the YAML renderer used by the `firewall-checklist` tool.
//!
//! ## Modules
//!
//! - `inventory` - Host inventory model and Ansible YAML parser
//! - `checklist` - Checklist model (entries, port and whitelist rules)
//! - `generator` - Inventory to checklist transformation
//! - `render` - YAML serialization of a checklist
//! - `error` - Error type shared by parsing and rendering
//!
//! ## Usage
//!
//! ```rust
//! use checklist_kit::{generate, parse_inventory, render_yaml};
//!
//! let inventory = parse_inventory(
//!     "all:\n  hosts:\n    a:\n      ansible_host: 1.1.1.1\n    b:\n      ansible_host: 2.2.2.2\n",
//! )?;
//! let checklist = generate(&inventory);
//! assert_eq!(checklist.len(), 2);
//!
//! let yaml = render_yaml(&checklist)?;
//! assert!(yaml.contains("- 2.2.2.2 # b"));
//! # Ok::<(), checklist_kit::ChecklistError>(())
//! ```

pub mod checklist;
pub mod error;
pub mod generator;
pub mod inventory;
pub mod render;

pub use checklist::{ChecklistEntry, FirewallChecklist, PortRule, WhitelistRule};
pub use error::{ChecklistError, Result};
pub use generator::{
    find_address_collisions, find_blank_addresses, generate, strip_quotes, AddressCollision,
};
pub use inventory::{parse_inventory, HostInventory, HostRecord};
pub use render::render_yaml;
