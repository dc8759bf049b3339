//! Core tag types and the static tag-config registry.

use serde::{Deserialize, Serialize};

/// A user-assigned item tag. Closed set; the persisted schema stores
/// these as lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagValue {
    Favorite,
    Keep,
    Junk,
    Infuse,
    Archive,
}

impl TagValue {
    /// All tag values, in display sort order.
    pub const ALL: [TagValue; 5] = [
        TagValue::Favorite,
        TagValue::Keep,
        TagValue::Junk,
        TagValue::Infuse,
        TagValue::Archive,
    ];

    /// Orders items within a bucket, ascending.
    pub fn sort_order(&self) -> u8 {
        match self {
            TagValue::Favorite => 0,
            TagValue::Keep => 1,
            TagValue::Junk => 2,
            TagValue::Infuse => 3,
            TagValue::Archive => 4,
        }
    }

    /// Localization key for the tag's display label.
    pub fn label_key(&self) -> &'static str {
        match self {
            TagValue::Favorite => "Tags.Favorite",
            TagValue::Keep => "Tags.Keep",
            TagValue::Junk => "Tags.Junk",
            TagValue::Infuse => "Tags.Infuse",
            TagValue::Archive => "Tags.Archive",
        }
    }
}

impl std::fmt::Display for TagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValue::Favorite => write!(f, "favorite"),
            TagValue::Keep => write!(f, "keep"),
            TagValue::Junk => write!(f, "junk"),
            TagValue::Infuse => write!(f, "infuse"),
            TagValue::Archive => write!(f, "archive"),
        }
    }
}

/// A keyboard command that assigns or clears a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCommand {
    Set(TagValue),
    Clear,
}

impl TagCommand {
    /// The tag this command leaves on the item, or `None` for `Clear`.
    pub fn tag(self) -> Option<TagValue> {
        match self {
            TagCommand::Set(tag) => Some(tag),
            TagCommand::Clear => None,
        }
    }
}

/// Static display metadata for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub tag: TagValue,
    pub label_key: &'static str,
    pub sort_order: u8,
    pub hotkey: &'static str,
}

/// The tag-config registry: one entry per tag, in sort order.
/// Process-wide constant; never mutated at runtime.
pub const TAG_CONFIG: [TagInfo; 5] = [
    TagInfo {
        tag: TagValue::Favorite,
        label_key: "Tags.Favorite",
        sort_order: 0,
        hotkey: "shift+1",
    },
    TagInfo {
        tag: TagValue::Keep,
        label_key: "Tags.Keep",
        sort_order: 1,
        hotkey: "shift+2",
    },
    TagInfo {
        tag: TagValue::Junk,
        label_key: "Tags.Junk",
        sort_order: 2,
        hotkey: "shift+3",
    },
    TagInfo {
        tag: TagValue::Infuse,
        label_key: "Tags.Infuse",
        sort_order: 3,
        hotkey: "shift+4",
    },
    TagInfo {
        tag: TagValue::Archive,
        label_key: "Tags.Archive",
        sort_order: 4,
        hotkey: "shift+5",
    },
];

/// The tag list, populated from the tag-config registry.
pub fn item_tag_list() -> &'static [TagInfo] {
    &TAG_CONFIG
}

/// Tag order used when grouping vault items for display.
pub fn vault_group_tag_order() -> Vec<TagValue> {
    item_tag_list().iter().map(|info| info.tag).collect()
}
