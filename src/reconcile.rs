//! Cleanup of annotations whose items no longer exist.
//!
//! One reconciliation pass reads an inventory snapshot and the annotation
//! store, then emits mutation intents for the persistence collaborator to
//! apply. The pass is idempotent: re-running it against the same stable
//! snapshot after its intents are applied emits nothing. The caller must
//! not run two passes against the same store concurrently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::annotation::{ItemAnnotation, ItemInfos};
use crate::item::{parse_instance_id, StoreSnapshot};
use crate::tag::TagValue;

/// A mutation the persistence collaborator should apply to the
/// annotation store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleanupIntent {
    /// Re-bind a tag to a crafted item's new instance id. The crafted
    /// date lets the persistence layer validate the binding.
    SetTag {
        item_id: String,
        tag: TagValue,
        #[serde(with = "chrono::serde::ts_seconds_option")]
        crafted_date: Option<DateTime<Utc>>,
    },
    /// Re-bind notes to a crafted item's new instance id.
    SetNote {
        item_id: String,
        note: String,
        #[serde(with = "chrono::serde::ts_seconds_option")]
        crafted_date: Option<DateTime<Utc>>,
    },
    /// Drop the annotation records for these instance ids.
    Purge { ids: Vec<String> },
}

/// Delete annotations that don't correspond to any item in the
/// newly-loaded stores.
///
/// Returns the intents to apply, in item-iteration order with at most
/// one trailing [`CleanupIntent::Purge`]. Returns nothing at all when
/// the snapshot is untrusted (no stores, an empty location, or a load
/// error) so a partial inventory can never wipe out notes.
pub fn clean_infos(stores: &[StoreSnapshot], infos: &ItemInfos) -> Vec<CleanupIntent> {
    if stores.is_empty()
        || stores.iter().any(|s| s.items.is_empty() || s.had_errors)
    {
        // don't accidentally wipe out notes
        return Vec::new();
    }
    if infos.is_empty() {
        return Vec::new();
    }

    // Crafting reissues the instance id but keeps the crafted date, so
    // index annotations by crafted date to find candidates for re-binding.
    let infos_by_crafted_date: HashMap<DateTime<Utc>, &ItemAnnotation> = infos
        .values()
        .filter_map(|info| info.crafted_date.map(|d| (d, info)))
        .collect();

    let mut intents = Vec::new();
    let mut max_item_id = 0u64;

    // Start from every key in the store and remove the ones still backed
    // by a live item; whatever remains refers to deleted items.
    let mut cleanup_ids: HashSet<&str> = infos.keys().map(String::as_str).collect();

    for store in stores {
        for item in &store.items {
            match parse_instance_id(&item.id) {
                Ok(id) => max_item_id = max_item_id.max(id),
                Err(err) => {
                    // Skip this item for id bookkeeping but still honor
                    // its annotation below.
                    tracing::warn!("clean_infos: {err}");
                }
            }
            let info = infos.get(&item.id);
            if info.is_some_and(ItemAnnotation::is_meaningful) {
                cleanup_ids.remove(item.id.as_str());
            } else if let Some(crafted_date) = item.crafted_date {
                // We may have this crafted item under its pre-reshape id.
                // If so, re-tag it under the new id; the old record stays
                // in the cleanup set and the new one gets saved.
                if let Some(crafted_info) = infos_by_crafted_date.get(&crafted_date) {
                    if let Some(tag) = crafted_info.tag {
                        intents.push(CleanupIntent::SetTag {
                            item_id: item.id.clone(),
                            tag,
                            crafted_date: Some(crafted_date),
                        });
                    }
                    if let Some(note) = crafted_info.notes.clone().filter(|n| !n.is_empty()) {
                        intents.push(CleanupIntent::SetNote {
                            item_id: item.id.clone(),
                            note,
                            crafted_date: Some(crafted_date),
                        });
                    }
                }
            }
        }
    }

    if !cleanup_ids.is_empty() {
        // Ids newer than everything in the snapshot may come from an
        // inventory load that raced ahead of us. Too new to judge; an
        // unparseable key is likewise never purged.
        let mut eligible: Vec<String> = cleanup_ids
            .iter()
            .filter(|id| parse_instance_id(id).is_ok_and(|n| n < max_item_id))
            .map(|id| id.to_string())
            .collect();
        eligible.sort_unstable();

        let excluded = cleanup_ids.len() - eligible.len();
        if excluded > 0 {
            tracing::warn!(
                "clean_infos: {excluded} infos have IDs newer than the newest ID in inventory"
            );
        }
        if !eligible.is_empty() {
            tracing::info!(
                "clean_infos: purging tag/notes from {} deleted items",
                eligible.len()
            );
            intents.push(CleanupIntent::Purge { ids: eligible });
        }
    }

    intents
}
