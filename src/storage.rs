use crate::errors::{StatsError, StatsResult};
use crate::models::{GalleryRecord, StatsReport};
use crate::translations::TranslationIndex;
use serde::de::DeserializeOwned;
use std::{
    ffi::OsString,
    future::Future,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::debug;

/// Source of the two input collections.
pub trait CollectionProvider {
    fn galleries(&self) -> impl Future<Output = StatsResult<Vec<GalleryRecord>>> + Send;
    fn translations(&self) -> impl Future<Output = StatsResult<TranslationIndex>> + Send;
}

#[derive(Debug, Clone)]
pub struct FileProvider {
    galleries_path: PathBuf,
    translations_path: PathBuf,
}

impl FileProvider {
    pub fn new(galleries_path: impl Into<PathBuf>, translations_path: impl Into<PathBuf>) -> Self {
        Self {
            galleries_path: galleries_path.into(),
            translations_path: translations_path.into(),
        }
    }
}

impl CollectionProvider for FileProvider {
    async fn galleries(&self) -> StatsResult<Vec<GalleryRecord>> {
        read_json(&self.galleries_path).await
    }

    async fn translations(&self) -> StatsResult<TranslationIndex> {
        let document: serde_json::Value = read_json(&self.translations_path).await?;
        Ok(TranslationIndex::from_document(&document))
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> StatsResult<T> {
    let bytes = fs::read(path).await.map_err(|err| StatsError::read(path, err))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    serde_json::from_slice(&bytes).map_err(|err| StatsError::parse(path, err))
}

/// Writes the report as pretty JSON next to `path` and renames it into place,
/// so readers never observe a half-written file. Returns the bytes written.
pub async fn persist_report(path: &Path, report: &StatsReport) -> StatsResult<u64> {
    let payload = serde_json::to_vec_pretty(report)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|err| StatsError::write(parent, err))?;
    }

    let staging = staging_path(path);
    if let Err(err) = fs::write(&staging, &payload).await {
        let _ = fs::remove_file(&staging).await;
        return Err(StatsError::write(&staging, err));
    }
    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(StatsError::write(path, err));
    }

    Ok(payload.len() as u64)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("stats.json"));
    name.push(".tmp");
    path.with_file_name(name)
}
