use crate::errors::{StatsError, StatsResult};
use chrono::NaiveDate;
use std::{env, path::PathBuf};

pub const DEFAULT_DATA_DIR: &str = "public/data";

pub const DATA_DIR_VAR: &str = "STATS_DATA_DIR";
pub const GALLERIES_PATH_VAR: &str = "STATS_GALLERIES_PATH";
pub const TRANSLATIONS_PATH_VAR: &str = "STATS_TRANSLATIONS_PATH";
pub const OUTPUT_PATH_VAR: &str = "STATS_OUTPUT_PATH";
pub const TODAY_VAR: &str = "STATS_TODAY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub galleries_path: PathBuf,
    pub translations_path: PathBuf,
    pub output_path: PathBuf,
    /// Pins the heatmap's "today"; the local date is used when unset.
    pub today: Option<NaiveDate>,
}

impl Settings {
    pub fn from_env() -> StatsResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StatsResult<Self> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = read(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let file = |key: &str, name: &str| read(key).map(PathBuf::from).unwrap_or_else(|| data_dir.join(name));

        let today = match read(TODAY_VAR) {
            Some(raw) => Some(parse_today(&raw)?),
            None => None,
        };

        Ok(Self {
            galleries_path: file(GALLERIES_PATH_VAR, "galleries.json"),
            translations_path: file(TRANSLATIONS_PATH_VAR, "translations.json"),
            output_path: file(OUTPUT_PATH_VAR, "stats.json"),
            today,
        })
    }
}

fn parse_today(raw: &str) -> StatsResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|err| StatsError::Config {
        key: TODAY_VAR,
        message: format!("{raw:?} is not a YYYY-MM-DD date ({err})"),
    })
}
