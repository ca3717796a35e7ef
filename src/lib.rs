pub mod app;
pub mod config;
pub mod dates;
pub mod diagnostics;
pub mod errors;
pub mod heatmap;
pub mod models;
pub mod quarterly;
pub mod stats;
pub mod storage;
pub mod tags;
pub mod translations;

pub use app::{generate, run};
pub use config::Settings;
pub use errors::{StatsError, StatsResult};
pub use stats::build_report_at;
pub use storage::{CollectionProvider, FileProvider, persist_report};
