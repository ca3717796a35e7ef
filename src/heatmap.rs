use crate::dates::{date_key, extract_embedded_date};
use crate::models::{GalleryRecord, Heatmap, HeatmapCell};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

pub fn build_heatmap(galleries: &[GalleryRecord], today: NaiveDate) -> Heatmap {
    let day_counts = favourites_per_day(galleries);
    let start = window_start(today);

    let mut data = Vec::with_capacity((today - start).num_days().max(0) as usize + 1);
    let mut date = start;
    while date <= today {
        let elapsed = (date - start).num_days();
        let key = date_key(date);
        data.push(HeatmapCell {
            x: (elapsed / 7) as u32,
            y: date.weekday().num_days_from_sunday(),
            v: day_counts.get(&key).copied().unwrap_or(0),
            d: key,
        });

        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let max_value = data.iter().map(|cell| cell.v).max().unwrap_or(0).max(1);

    Heatmap { data, max_value }
}

/// Counts keyed by the literal `YYYY-MM-DD` text found in `favTime`.
fn favourites_per_day(galleries: &[GalleryRecord]) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for gallery in galleries {
        if let Some(date) = gallery.fav_time.as_deref().and_then(extract_embedded_date) {
            *counts.entry(date.key).or_default() += 1;
        }
    }
    counts
}

/// Same month and day one year earlier; Feb 29 rolls forward to Mar 1.
pub fn one_year_before(today: NaiveDate) -> NaiveDate {
    let year = today.year() - 1;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(today)
}

/// The Sunday on or before `one_year_before(today)`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    let anchor = one_year_before(today);
    anchor - Duration::days(anchor.weekday().num_days_from_sunday() as i64)
}
