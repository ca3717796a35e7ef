use crate::models::{GalleryRecord, TagStat, TagType, TagsByType};
use crate::translations::TranslationIndex;
use std::collections::HashMap;

pub const TOP_TAG_LIMIT: usize = 20;

/// Frequency counter that remembers first-seen order, so a stable sort by
/// count keeps earlier tags ahead of later ones on ties.
#[derive(Debug, Default)]
struct TagCounter {
    positions: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl TagCounter {
    fn add(&mut self, tag: &str) {
        match self.positions.get(tag) {
            Some(&index) => self.entries[index].1 += 1,
            None => {
                self.positions.insert(tag.to_string(), self.entries.len());
                self.entries.push((tag.to_string(), 1));
            }
        }
    }

    fn ranked(self) -> Vec<(String, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|left, right| right.1.cmp(&left.1));
        entries
    }
}

pub fn top_tags(
    galleries: &[GalleryRecord],
    translations: &TranslationIndex,
    tag_type: TagType,
) -> Vec<TagStat> {
    let prefix = tag_type.prefix();
    let mut counter = TagCounter::default();

    for tag in galleries.iter().flat_map(|gallery| gallery.string_tags()) {
        if tag.starts_with(&prefix) {
            counter.add(tag);
        }
    }

    counter
        .ranked()
        .into_iter()
        .take(TOP_TAG_LIMIT)
        .map(|(tag, count)| tag_stat(tag, count, translations))
        .collect()
}

pub fn tag_stats(galleries: &[GalleryRecord], translations: &TranslationIndex) -> TagsByType {
    let mut tags = TagsByType::default();
    for tag_type in TagType::ALL {
        tags.insert(tag_type, top_tags(galleries, translations, tag_type));
    }
    tags
}

/// `"ns:value"` -> `("ns", "value")`. Only the segment up to a second colon is
/// kept as the value.
pub fn split_tag(tag: &str) -> (&str, &str) {
    let mut parts = tag.split(':');
    let namespace = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();
    (namespace, value)
}

fn tag_stat(tag: String, count: u64, translations: &TranslationIndex) -> TagStat {
    let (namespace, value) = split_tag(&tag);
    let detail = translations.lookup(namespace, value).unwrap_or_default();

    TagStat {
        namespace: namespace.to_string(),
        value: value.to_string(),
        tag,
        count,
        tag_cn: detail.name,
        intro: detail.intro,
        links: detail.links,
    }
}
