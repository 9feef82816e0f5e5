use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::ports::{ChatClient, ChatClientError};
use crate::application::retry::RetryPolicy;
use crate::domain::{ReportSection, SummaryResult, SynonymDictionary};

/// Turns the aggregated transcript into a structured summary through the
/// chat model.
///
/// The retry policy is blanket: network errors, rate limits, and unparseable
/// responses all count as a failed attempt and wait out the same backoff
/// schedule. Callers that need to treat those differently can pass a policy
/// per instance without touching call sites.
pub struct SummaryService<C>
where
    C: ChatClient,
{
    chat: Arc<C>,
    retry: RetryPolicy,
}

impl<C> SummaryService<C>
where
    C: ChatClient,
{
    pub fn new(chat: Arc<C>, retry: RetryPolicy) -> Self {
        Self { chat, retry }
    }

    pub async fn summarize(
        &self,
        instruction: &str,
        transcript: &str,
        synonym_dict: &SynonymDictionary,
    ) -> Result<SummaryResult, SummaryServiceError> {
        let payload = serde_json::json!({
            "script": transcript,
            "synonym_dict": synonym_dict.as_str(),
        });
        let prompt = format!("{payload}\n\n* Output\n");

        self.request_json(instruction, &prompt, |raw| {
            serde_json::from_str::<SummaryResult>(raw)
        })
        .await
    }

    /// Match image captions to summary sections through the tag instruction.
    ///
    /// The result is returned raw; the pipeline currently logs it without
    /// merging it into the persisted artifacts.
    pub async fn match_captions(
        &self,
        instruction: &str,
        sections: &[ReportSection],
        captions: &BTreeMap<String, String>,
    ) -> Result<serde_json::Value, SummaryServiceError> {
        let payload = serde_json::json!({
            "stt_results": sections,
            "image_text_results": captions,
        });
        let prompt = format!(
            "{}\n\n* Output\n",
            serde_json::to_string_pretty(&payload).expect("maps of strings always serialize")
        );

        self.request_json(instruction, &prompt, |raw| {
            serde_json::from_str::<serde_json::Value>(raw)
        })
        .await
    }

    async fn request_json<T>(
        &self,
        instruction: &str,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, serde_json::Error>,
    ) -> Result<T, SummaryServiceError> {
        let mut attempt = 1;
        loop {
            let outcome = match self.chat.complete_json(instruction, prompt).await {
                Ok(raw) => parse(&raw).map_err(|e| {
                    SummaryServiceError::MalformedResponse {
                        detail: e.to_string(),
                    }
                }),
                Err(e) => Err(SummaryServiceError::Completion(e)),
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retry.max_attempts => {
                    let delay = self.retry.delay_after(attempt);
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "Summarization attempt failed, retrying"
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
                Err(e) => {
                    return Err(SummaryServiceError::AttemptsExhausted {
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryServiceError {
    #[error("completion: {0}")]
    Completion(#[from] ChatClientError),
    #[error("malformed response: {detail}")]
    MalformedResponse { detail: String },
    #[error("summarization failed after {attempts} attempts: {source}")]
    AttemptsExhausted {
        attempts: u32,
        source: Box<SummaryServiceError>,
    },
}
