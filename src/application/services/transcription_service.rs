use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::application::retry::RetryPolicy;
use crate::domain::{AudioChunk, Transcript};

/// Transcribes segmented audio chunk by chunk and reassembles the transcript
/// in chunk index order.
///
/// Retry contract per chunk: a rate-limited attempt waits out the policy's
/// backoff before the next try; any other failure is retried immediately.
/// Exhausting the policy propagates the last error and aborts the run —
/// there is no skip-and-continue for individual chunks.
pub struct TranscriptionService<E>
where
    E: TranscriptionEngine,
{
    engine: Arc<E>,
    language: String,
    retry: RetryPolicy,
}

impl<E> TranscriptionService<E>
where
    E: TranscriptionEngine,
{
    pub fn new(engine: Arc<E>, language: String, retry: RetryPolicy) -> Self {
        Self {
            engine,
            language,
            retry,
        }
    }

    pub async fn transcribe_chunks(
        &self,
        chunks: &[AudioChunk],
    ) -> Result<Transcript, TranscriptionServiceError> {
        let mut transcript = Transcript::new();

        for chunk in chunks {
            tracing::info!(
                chunk = chunk.index + 1,
                total = chunks.len(),
                "Transcribing chunk"
            );
            let text = self.transcribe_chunk(chunk).await?;
            transcript.push_segment(text);
        }

        Ok(transcript)
    }

    async fn transcribe_chunk(
        &self,
        chunk: &AudioChunk,
    ) -> Result<String, TranscriptionServiceError> {
        let audio_data = tokio::fs::read(&chunk.path).await.map_err(|e| {
            TranscriptionServiceError::ChunkRead {
                index: chunk.index,
                source: e,
            }
        })?;

        let mut attempt = 1;
        loop {
            match self.engine.transcribe(&audio_data, &self.language).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < self.retry.max_attempts => {
                    let delay = if e.is_rate_limit() {
                        self.retry.delay_after(attempt)
                    } else {
                        std::time::Duration::ZERO
                    };
                    tracing::warn!(
                        chunk = chunk.index,
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "Chunk transcription failed, retrying"
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
                Err(e) => {
                    return Err(TranscriptionServiceError::AttemptsExhausted {
                        index: chunk.index,
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("reading chunk {index}: {source}")]
    ChunkRead {
        index: usize,
        source: std::io::Error,
    },
    #[error("chunk {index} failed after {attempts} attempts: {source}")]
    AttemptsExhausted {
        index: usize,
        attempts: u32,
        source: TranscriptionError,
    },
}
