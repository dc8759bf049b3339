//! Inventory item and store-snapshot views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The slice of an inventory item the annotation subsystem needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    /// Instance id: a monotonically-issued numeric string. Compared as a
    /// 64-bit integer, never lexicographically.
    pub id: String,
    /// Definition hash, shared by all copies of the same item.
    pub hash: u32,
    pub instanced: bool,
    pub taggable: bool,
    /// Crafting timestamp, stable across the id changes that crafting
    /// and reshaping cause.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub crafted_date: Option<DateTime<Utc>>,
}

/// One character's (or the vault's) loaded items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub items: Vec<ItemRef>,
    /// True when the inventory load for this location reported errors.
    /// Any errored location makes the whole snapshot untrusted.
    pub had_errors: bool,
}

/// Error parsing an instance-id string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid instance id: {0:?}")]
pub struct InstanceIdError(pub String);

/// Parse an instance id into its numeric form.
pub fn parse_instance_id(id: &str) -> Result<u64, InstanceIdError> {
    id.parse().map_err(|_| InstanceIdError(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_large_ids() {
        // Instance ids exceed i32 range almost immediately.
        assert_eq!(
            parse_instance_id("6917529872079917443"),
            Ok(6917529872079917443)
        );
        assert_eq!(parse_instance_id("100"), Ok(100));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = parse_instance_id("not-an-id").unwrap_err();
        assert!(err.to_string().contains("not-an-id"));
        assert!(parse_instance_id("").is_err());
        assert!(parse_instance_id("-5").is_err());
    }

    #[test]
    fn numeric_order_disagrees_with_string_order() {
        // "9" > "100" as strings; the parse must win.
        assert!(parse_instance_id("9").unwrap() < parse_instance_id("100").unwrap());
    }
}
