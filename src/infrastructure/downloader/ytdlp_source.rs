use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioSource, AudioSourceError, DownloadedAudio};
use crate::domain::canonical_base_name;

/// Fetches source audio through the `yt-dlp` binary.
///
/// Two passes: probe the title first so the output file can be named after
/// the cleaned, bracket-extracted base name, then download the best audio
/// re-encoded to MP3 under that name.
pub struct YtDlpAudioSource {
    output_dir: PathBuf,
}

impl YtDlpAudioSource {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    async fn probe_title(&self, url: &str) -> Result<String, AudioSourceError> {
        let output = Command::new("yt-dlp")
            .args(["--print", "title", "--skip-download", url])
            .output()
            .await
            .map_err(|e| AudioSourceError::DownloaderUnavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(AudioSourceError::DownloadFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl AudioSource for YtDlpAudioSource {
    async fn fetch(&self, url: &str) -> Result<DownloadedAudio, AudioSourceError> {
        let title = self.probe_title(url).await?;
        let base_name = canonical_base_name(&title);

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| AudioSourceError::DownloadFailed(e.to_string()))?;

        let template = self.output_dir.join(format!("{base_name}.%(ext)s"));
        tracing::info!(url, title = %base_name, "Downloading source audio");

        let output = Command::new("yt-dlp")
            .args([
                "--extract-audio",
                "--audio-format",
                "mp3",
                "--audio-quality",
                "192K",
                "--output",
            ])
            .arg(&template)
            .arg(url)
            .output()
            .await
            .map_err(|e| AudioSourceError::DownloaderUnavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(AudioSourceError::DownloadFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        let path = self.output_dir.join(format!("{base_name}.mp3"));
        if !path.exists() {
            return Err(AudioSourceError::FileMissing(path.display().to_string()));
        }

        tracing::info!(path = %path.display(), "Source audio downloaded");

        Ok(DownloadedAudio {
            path,
            title: base_name,
        })
    }
}
