use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribe one audio chunk, hinted with a BCP-47 language code.
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &str,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("audio chunk unreadable: {0}")]
    ChunkUnreadable(String),
}

impl TranscriptionError {
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}
