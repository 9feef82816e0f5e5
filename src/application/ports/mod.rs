mod audio_source;
mod chat_client;
mod transcription_engine;

pub use audio_source::{AudioSource, AudioSourceError, DownloadedAudio};
pub use chat_client::{ChatClient, ChatClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
