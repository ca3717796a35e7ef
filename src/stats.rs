use crate::heatmap::build_heatmap;
use crate::models::{CategoryCounts, CategoryStats, GalleryRecord, StatsReport};
use crate::quarterly::quarterly_series;
use crate::tags::tag_stats;
use crate::translations::TranslationIndex;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use tracing::info;

pub fn build_report_at(
    generated_at: DateTime<Utc>,
    today: NaiveDate,
    galleries: &[GalleryRecord],
    translations: &TranslationIndex,
) -> StatsReport {
    info!("calculating category stats");
    let stats = category_stats(galleries);

    info!("calculating tag stats");
    let tags = tag_stats(galleries, translations);

    info!("calculating quarterly stats");
    let quarterly = quarterly_series(galleries);

    info!("calculating heatmap data");
    let heatmap = build_heatmap(galleries, today);

    StatsReport {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        stats,
        tags,
        quarterly,
        heatmap,
    }
}

pub fn category_stats(galleries: &[GalleryRecord]) -> CategoryStats {
    let mut categories = CategoryCounts::default();
    for category in galleries.iter().filter_map(GalleryRecord::category) {
        categories.increment(category);
    }

    CategoryStats {
        total_count: galleries.len() as u64,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TagType};
    use chrono::TimeZone;
    use serde_json::json;

    fn galleries(value: serde_json::Value) -> Vec<GalleryRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn pinned() -> (DateTime<Utc>, NaiveDate) {
        let now = Utc.with_ymd_and_hms(2021, 6, 1, 8, 30, 0).unwrap();
        (now, NaiveDate::from_ymd_opt(2021, 6, 1).unwrap())
    }

    #[test]
    fn category_stats_counts_known_labels() {
        let records = galleries(json!([
            { "category": "Manga" },
            { "category": "Manga" },
            { "category": "Artist CG" },
            { "category": "Unknown" },
            { "category": "manga" },
            {}
        ]));
        let stats = category_stats(&records);

        assert_eq!(stats.total_count, 6);
        assert_eq!(stats.categories.get(Category::Manga), 2);
        assert_eq!(stats.categories.get(Category::ArtistCg), 1);
        assert_eq!(stats.categories.get(Category::Misc), 0);
        assert_eq!(stats.categories.sum(), 3);
        assert!(stats.categories.sum() <= stats.total_count);
    }

    #[test]
    fn category_sum_equals_total_when_all_known() {
        let records = galleries(json!([
            { "category": "Doujinshi" },
            { "category": "Cosplay" },
            { "category": "Non-H" }
        ]));
        let stats = category_stats(&records);
        assert_eq!(stats.categories.sum(), stats.total_count);
    }

    #[test]
    fn single_gallery_scenario() {
        let records = galleries(json!([{
            "category": "Manga",
            "tags": ["artist:jane", "artist:jane"],
            "posted": "1609459200",
            "favTime": "2021-01-15 12:00"
        }]));
        let (now, today) = pinned();
        let report = build_report_at(now, today, &records, &TranslationIndex::default());

        assert_eq!(report.generated_at, "2021-06-01T08:30:00.000Z");
        assert_eq!(report.stats.total_count, 1);
        assert_eq!(report.stats.categories.get(Category::Manga), 1);

        let artists = report.tags.get(TagType::Artist);
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].tag, "artist:jane");
        assert_eq!(artists[0].count, 2);
        assert_eq!(artists[0].tag_cn, "");

        assert_eq!(report.quarterly.len(), 1);
        assert_eq!(report.quarterly[0].quarter, "2021-Q1");
        assert_eq!(report.quarterly[0].posted_count, 1);
        assert_eq!(report.quarterly[0].fav_time_count, 1);

        let cell = report.heatmap.data.iter().find(|cell| cell.d == "2021-01-15").unwrap();
        assert_eq!(cell.v, 1);
        assert_eq!(report.heatmap.max_value, 1);
    }

    #[test]
    fn empty_collection_report() {
        let (now, today) = pinned();
        let report = build_report_at(now, today, &[], &TranslationIndex::default());

        assert_eq!(report.stats.total_count, 0);
        assert!(report.stats.categories.iter().all(|(_, count)| count == 0));
        assert!(TagType::ALL.iter().all(|tag_type| report.tags.get(*tag_type).is_empty()));
        assert!(report.quarterly.is_empty());
        assert!(!report.heatmap.data.is_empty());
        assert!(report.heatmap.data.iter().all(|cell| cell.v == 0));
        assert_eq!(report.heatmap.max_value, 1);
    }

    #[test]
    fn report_serializes_with_expected_keys() {
        let (now, today) = pinned();
        let report = build_report_at(now, today, &[], &TranslationIndex::default());
        let value = serde_json::to_value(&report).unwrap();

        for key in ["generatedAt", "stats", "tags", "quarterly", "heatmap"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["stats"]["total_count"], 0);
        assert_eq!(value["stats"]["categories"]["Asian Porn"], 0);
        assert_eq!(value["tags"].as_object().unwrap().len(), 6);
        assert_eq!(value["heatmap"]["maxValue"], 1);
        assert_eq!(value["heatmap"]["data"][0]["x"], 0);
        assert_eq!(value["heatmap"]["data"][0]["y"], 0);
    }
}
