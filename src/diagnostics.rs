use crate::dates::{extract_embedded_date, posted_quarter_key};
use crate::models::GalleryRecord;

/// Aggregate tally of values the aggregators silently leave out. Only ever
/// reported as totals; individual records are never logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub unknown_category: u64,
    pub non_string_tags: u64,
    pub unparseable_posted: u64,
    pub undated_fav_time: u64,
}

impl SkipCounts {
    pub fn scan(galleries: &[GalleryRecord]) -> Self {
        let mut counts = Self::default();
        for gallery in galleries {
            if gallery.category().is_none() {
                counts.unknown_category += 1;
            }
            counts.non_string_tags += gallery.tags.iter().filter(|tag| !tag.is_string()).count() as u64;

            if let Some(posted) = gallery.posted.as_deref() {
                if posted_quarter_key(posted).is_none() {
                    counts.unparseable_posted += 1;
                }
            }

            let fav_quarter = gallery
                .fav_time
                .as_deref()
                .map(|text| extract_embedded_date(text).and_then(|date| date.quarter_key()));
            if let Some(None) = fav_quarter {
                counts.undated_fav_time += 1;
            }
        }
        counts
    }

    pub fn total(&self) -> u64 {
        self.unknown_category + self.non_string_tags + self.unparseable_posted + self.undated_fav_time
    }
}
