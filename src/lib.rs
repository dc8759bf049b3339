//! stash-tags: Item annotation reconciliation and tag priority tables.
//!
//! Annotations are user-assigned tags and free-text notes attached to
//! individual inventory items. They are keyed by instance id (or by
//! definition hash for non-instanced items) and persist across inventory
//! refreshes, so they need a cleanup pass to drop records for items that
//! no longer exist and to re-bind records across crafted-item id changes.
//!
//! The store itself is owned by a persistence collaborator; this crate
//! reads snapshots and emits mutation intents, never writing directly.

pub mod annotation;
pub mod item;
pub mod priority;
pub mod reconcile;
pub mod resolve;
pub mod tag;

pub use annotation::*;
pub use item::*;
pub use priority::*;
pub use reconcile::*;
pub use resolve::*;
pub use tag::*;
