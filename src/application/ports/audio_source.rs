use std::path::PathBuf;

use async_trait::async_trait;

/// Audio fetched from an external source, ready for segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedAudio {
    pub path: PathBuf,
    pub title: String,
}

#[async_trait]
pub trait AudioSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<DownloadedAudio, AudioSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioSourceError {
    #[error("downloader unavailable: {0}")]
    DownloaderUnavailable(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("downloaded file missing: {0}")]
    FileMissing(String),
}
