//! Annotation records and the maps they live in.
//!
//! The shapes here are a contract with the persistence collaborator's
//! schema; crafted dates travel as epoch seconds on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tag::TagValue;

/// A user annotation on one instanced item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Crafting timestamp of the item this annotation was attached to,
    /// used to re-bind the annotation when crafting reissues the id.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub crafted_date: Option<DateTime<Utc>>,
}

impl ItemAnnotation {
    /// An annotation is meaningful if it carries a tag or non-empty notes.
    /// Meaningless records are cleanup targets.
    pub fn is_meaningful(&self) -> bool {
        self.tag.is_some() || self.notes.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// A user annotation on a non-instanced item, keyed by definition hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHashTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Annotations for instanced items, keyed by instance id.
pub type ItemInfos = HashMap<String, ItemAnnotation>;

/// Annotations for non-instanced items, keyed by definition hash.
pub type ItemHashTags = HashMap<u32, ItemHashTag>;
