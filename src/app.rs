use crate::config::Settings;
use crate::diagnostics::SkipCounts;
use crate::errors::StatsResult;
use crate::models::StatsReport;
use crate::stats::build_report_at;
use crate::storage::{CollectionProvider, FileProvider, persist_report};
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub gallery_count: usize,
    pub bytes_written: u64,
}

pub async fn run(settings: &Settings) -> StatsResult<RunSummary> {
    let provider = FileProvider::new(&settings.galleries_path, &settings.translations_path);
    let today = settings.today.unwrap_or_else(|| Local::now().date_naive());

    let report = generate(&provider, Utc::now(), today).await?;
    let gallery_count = report.stats.total_count as usize;

    info!("writing {}", settings.output_path.display());
    let bytes_written = persist_report(&settings.output_path, &report).await?;
    info!(
        "stats generated at {} ({:.2} KB)",
        settings.output_path.display(),
        bytes_written as f64 / 1024.0
    );

    Ok(RunSummary {
        output_path: settings.output_path.clone(),
        gallery_count,
        bytes_written,
    })
}

pub async fn generate<P: CollectionProvider>(
    provider: &P,
    generated_at: DateTime<Utc>,
    today: NaiveDate,
) -> StatsResult<StatsReport> {
    info!("reading data files");
    let galleries = provider.galleries().await?;
    let translations = provider.translations().await?;
    info!("loaded {} galleries", galleries.len());

    let skipped = SkipCounts::scan(&galleries);
    debug!(
        unknown_category = skipped.unknown_category,
        non_string_tags = skipped.non_string_tags,
        unparseable_posted = skipped.unparseable_posted,
        undated_fav_time = skipped.undated_fav_time,
        "values left out of aggregation"
    );

    Ok(build_report_at(generated_at, today, &galleries, &translations))
}
