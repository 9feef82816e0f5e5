use std::path::PathBuf;

use crate::infrastructure::audio::DEFAULT_CHUNK_SIZE_BYTES;

/// Explicit runtime configuration, built once from the environment and
/// passed into components at construction. Nothing below `main` reads
/// process globals.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub audio: AudioSettings,
    pub llm: LlmSettings,
    pub resources: ResourceSettings,
    pub output: OutputSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AudioSettings {
    pub chunk_size_bytes: u64,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub chat_model: String,
    pub transcription_model: String,
}

#[derive(Debug, Clone)]
pub struct ResourceSettings {
    pub prompt_dir: PathBuf,
    pub image_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub dir: PathBuf,
    pub scratch_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub match_captions: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| SettingsError::MissingApiKey)?;

        let chunk_size_bytes = match std::env::var("BRIEFING_CHUNK_SIZE_BYTES") {
            Ok(v) => v
                .parse()
                .map_err(|_| SettingsError::InvalidValue("BRIEFING_CHUNK_SIZE_BYTES"))?,
            Err(_) => DEFAULT_CHUNK_SIZE_BYTES,
        };

        Ok(Self {
            api: ApiSettings {
                api_key,
                base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            },
            audio: AudioSettings {
                chunk_size_bytes,
                language: env_or("BRIEFING_LANGUAGE", "en"),
            },
            llm: LlmSettings {
                chat_model: env_or("BRIEFING_CHAT_MODEL", "gpt-4o"),
                transcription_model: env_or("BRIEFING_TRANSCRIPTION_MODEL", "whisper-1"),
            },
            resources: ResourceSettings {
                prompt_dir: env_or("BRIEFING_PROMPT_DIR", "prompts").into(),
                image_dir: env_or("BRIEFING_IMAGE_DIR", "static/images").into(),
            },
            output: OutputSettings {
                dir: env_or("BRIEFING_OUTPUT_DIR", "output").into(),
                scratch_dir: env_or("BRIEFING_SCRATCH_DIR", "chunks").into(),
            },
            pipeline: PipelineSettings {
                match_captions: std::env::var("BRIEFING_MATCH_CAPTIONS")
                    .map(|v| v.to_lowercase() == "true" || v == "1")
                    .unwrap_or(false),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
}
