//! Error types for inventory parsing and checklist rendering

use thiserror::Error;

/// Result type alias for kit operations
pub type Result<T> = std::result::Result<T, ChecklistError>;

/// Errors raised at the document boundaries.
///
/// Generation itself cannot fail; only turning text into an inventory and a
/// checklist back into text can.
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// Inventory document is not valid YAML or has the wrong shape
    #[error("Failed to parse host inventory: {source}")]
    InventoryParse {
        #[source]
        source: serde_yaml::Error,
    },

    /// Checklist could not be serialized
    #[error("Failed to render firewall checklist: {source}")]
    Render {
        #[source]
        source: serde_yaml::Error,
    },
}
