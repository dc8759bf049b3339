//! Pure tag/notes resolution for a single item.

use crate::annotation::{ItemHashTags, ItemInfos};
use crate::item::ItemRef;
use crate::tag::TagValue;

/// Where an item's annotation lives, if anywhere.
///
/// Making the dispatch explicit keeps the taggable/instanced cases
/// exhaustively testable instead of buried in nested conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKey<'a> {
    /// The item cannot carry annotations at all.
    NotTaggable,
    /// Instanced item, annotated by instance id.
    Instance(&'a str),
    /// Non-instanced item, annotated by definition hash.
    Hash(u32),
}

impl ItemRef {
    /// Which annotation map (and key) applies to this item.
    pub fn annotation_key(&self) -> AnnotationKey<'_> {
        if !self.taggable {
            AnnotationKey::NotTaggable
        } else if self.instanced {
            AnnotationKey::Instance(&self.id)
        } else {
            AnnotationKey::Hash(self.hash)
        }
    }
}

/// The item's effective tag, or `None` if untagged or not taggable.
pub fn get_tag(
    item: &ItemRef,
    infos: &ItemInfos,
    hash_tags: Option<&ItemHashTags>,
) -> Option<TagValue> {
    match item.annotation_key() {
        AnnotationKey::NotTaggable => None,
        AnnotationKey::Instance(id) => infos.get(id).and_then(|info| info.tag),
        AnnotationKey::Hash(hash) => hash_tags.and_then(|tags| tags.get(&hash)).and_then(|t| t.tag),
    }
}

/// The item's notes, or `None` if unset, empty, or not taggable.
pub fn get_notes<'a>(
    item: &ItemRef,
    infos: &'a ItemInfos,
    hash_tags: Option<&'a ItemHashTags>,
) -> Option<&'a str> {
    let notes = match item.annotation_key() {
        AnnotationKey::NotTaggable => None,
        AnnotationKey::Instance(id) => infos.get(id).and_then(|info| info.notes.as_deref()),
        AnnotationKey::Hash(hash) => hash_tags
            .and_then(|tags| tags.get(&hash))
            .and_then(|t| t.notes.as_deref()),
    };
    notes.filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{ItemAnnotation, ItemHashTag};

    fn item(id: &str, hash: u32, instanced: bool, taggable: bool) -> ItemRef {
        ItemRef {
            id: id.to_string(),
            hash,
            instanced,
            taggable,
            crafted_date: None,
        }
    }

    fn infos_with(id: &str, tag: Option<TagValue>, notes: Option<&str>) -> ItemInfos {
        let mut infos = ItemInfos::new();
        infos.insert(
            id.to_string(),
            ItemAnnotation {
                tag,
                notes: notes.map(str::to_string),
                crafted_date: None,
            },
        );
        infos
    }

    #[test]
    fn not_taggable_resolves_to_none() {
        let infos = infos_with("100", Some(TagValue::Keep), Some("notes"));
        let it = item("100", 7, true, false);
        assert_eq!(it.annotation_key(), AnnotationKey::NotTaggable);
        assert_eq!(get_tag(&it, &infos, None), None);
        assert_eq!(get_notes(&it, &infos, None), None);
    }

    #[test]
    fn instanced_resolves_by_id() {
        let infos = infos_with("100", Some(TagValue::Favorite), Some("crafted 5/5"));
        let it = item("100", 7, true, true);
        assert_eq!(get_tag(&it, &infos, None), Some(TagValue::Favorite));
        assert_eq!(get_notes(&it, &infos, None), Some("crafted 5/5"));

        let other = item("101", 7, true, true);
        assert_eq!(get_tag(&other, &infos, None), None);
    }

    #[test]
    fn non_instanced_resolves_by_hash() {
        let infos = infos_with("100", Some(TagValue::Favorite), None);
        let mut hash_tags = ItemHashTags::new();
        hash_tags.insert(
            7,
            ItemHashTag {
                tag: Some(TagValue::Archive),
                notes: Some("material".into()),
            },
        );
        let it = item("100", 7, false, true);
        assert_eq!(get_tag(&it, &infos, Some(&hash_tags)), Some(TagValue::Archive));
        assert_eq!(get_notes(&it, &infos, Some(&hash_tags)), Some("material"));
    }

    #[test]
    fn missing_hash_map_treated_as_empty() {
        let infos = infos_with("100", Some(TagValue::Favorite), Some("n"));
        let it = item("100", 7, false, true);
        assert_eq!(get_tag(&it, &infos, None), None);
        assert_eq!(get_notes(&it, &infos, None), None);
    }

    #[test]
    fn empty_notes_resolve_to_none() {
        let infos = infos_with("100", None, Some(""));
        let it = item("100", 7, true, true);
        assert_eq!(get_notes(&it, &infos, None), None);
    }
}
