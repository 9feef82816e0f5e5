use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{ChatClient, ChatClientError};

/// Chat-completions adapter for OpenAI-compatible endpoints.
///
/// Summarization requests pin `temperature` to 0 and ask for
/// `response_format = json_object`; vision requests ship the image inline as
/// a base64 data URI.
pub struct OpenAiChatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiChatClient {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    async fn send_completion(
        &self,
        body: serde_json::Value,
    ) -> Result<String, ChatClientError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatClientError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ChatClientError::RateLimited(text));
            }
            return Err(ChatClientError::ApiRequestFailed(format!(
                "status {}: {}",
                status, text
            )));
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| ChatClientError::ApiRequestFailed(format!("body: {}", e)))?;

        let completion: ChatCompletion = serde_json::from_slice(&raw_bytes).map_err(|e| {
            let raw_text = String::from_utf8_lossy(&raw_bytes);
            tracing::error!(raw_response = %raw_text, "Failed to parse chat completion JSON");
            ChatClientError::InvalidResponse(format!("completion parse: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ChatClientError::InvalidResponse("no choices in response".to_string()))
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete_json(
        &self,
        instruction: &str,
        prompt: &str,
    ) -> Result<String, ChatClientError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": instruction },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.0,
            "response_format": { "type": "json_object" }
        });

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Requesting JSON completion");

        self.send_completion(body).await
    }

    async fn describe_image(
        &self,
        prompt: &str,
        image_data: &[u8],
        mime_type: &str,
    ) -> Result<String, ChatClientError> {
        let b64 = general_purpose::STANDARD.encode(image_data);
        let data_uri = format!("data:{mime_type};base64,{b64}");

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": prompt },
                        { "type": "image_url", "image_url": { "url": data_uri } }
                    ]
                }
            ]
        });

        tracing::debug!(model = %self.model, image_bytes = image_data.len(), "Requesting image caption");

        self.send_completion(body).await
    }
}
