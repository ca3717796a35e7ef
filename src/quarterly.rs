use crate::dates::{extract_embedded_date, posted_quarter_key};
use crate::models::{GalleryRecord, QuarterlyPoint};
use std::collections::{BTreeMap, BTreeSet};

/// Per-quarter counts of `posted` (UTC epoch seconds) and `favTime` (literal
/// date text). The two series are bucketed independently, so the same day can
/// land in different quarters near a boundary.
pub fn quarterly_series(galleries: &[GalleryRecord]) -> Vec<QuarterlyPoint> {
    let mut posted: BTreeMap<String, u64> = BTreeMap::new();
    let mut fav_time: BTreeMap<String, u64> = BTreeMap::new();

    for gallery in galleries {
        if let Some(key) = gallery.posted.as_deref().and_then(posted_quarter_key) {
            *posted.entry(key).or_default() += 1;
        }

        let fav_key = gallery
            .fav_time
            .as_deref()
            .and_then(extract_embedded_date)
            .and_then(|date| date.quarter_key());
        if let Some(key) = fav_key {
            *fav_time.entry(key).or_default() += 1;
        }
    }

    let quarters: BTreeSet<&String> = posted.keys().chain(fav_time.keys()).collect();
    quarters
        .into_iter()
        .map(|quarter| QuarterlyPoint {
            quarter: quarter.clone(),
            posted_count: posted.get(quarter).copied().unwrap_or(0),
            fav_time_count: fav_time.get(quarter).copied().unwrap_or(0),
        })
        .collect()
}
