use async_trait::async_trait;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Run a chat completion constrained to return a JSON object.
    async fn complete_json(
        &self,
        instruction: &str,
        prompt: &str,
    ) -> Result<String, ChatClientError>;

    /// Submit an image with a text prompt to a vision-capable model and
    /// return the caption text.
    async fn describe_image(
        &self,
        prompt: &str,
        image_data: &[u8],
        mime_type: &str,
    ) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
