//! Fixed priority orderings used to decide item disposition.
//!
//! Each table is a total order over the five tags plus `None` (untagged).
//! Callers compare items by index in the table; a lower index means the
//! item is a better candidate for the named action. Static data, never
//! computed.

use crate::tag::TagValue;

/// Which items should leave a character first when it is full.
pub const CHARACTER_DISPLACE_PRIORITY: [Option<TagValue>; 6] = [
    // Archived items and infusion fuel belong in the vault
    Some(TagValue::Archive),
    Some(TagValue::Infuse),
    None,
    Some(TagValue::Junk),
    Some(TagValue::Keep),
    // Favorites you probably want to keep on your character
    Some(TagValue::Favorite),
];

/// Which items should leave the vault first when it is full.
pub const VAULT_DISPLACE_PRIORITY: [Option<TagValue>; 6] = [
    // Junk should bubble towards the character so you remember to delete it
    Some(TagValue::Junk),
    None,
    Some(TagValue::Keep),
    Some(TagValue::Favorite),
    Some(TagValue::Infuse),
    // Archived items should absolutely stay in the vault
    Some(TagValue::Archive),
];

/// Which items should be chosen first to replace an equipped item.
pub const EQUIP_REPLACE_PRIORITY: [Option<TagValue>; 6] = [
    Some(TagValue::Favorite),
    Some(TagValue::Keep),
    None,
    Some(TagValue::Infuse),
    Some(TagValue::Junk),
    Some(TagValue::Archive),
];

/// Rank of a tag within a priority table. Lower is higher priority.
pub fn priority_rank(table: &[Option<TagValue>], tag: Option<TagValue>) -> usize {
    table.iter().position(|t| *t == tag).unwrap_or(table.len())
}
