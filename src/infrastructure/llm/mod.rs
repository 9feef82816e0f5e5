mod openai_chat_client;
mod openai_whisper_engine;

pub use openai_chat_client::OpenAiChatClient;
pub use openai_whisper_engine::OpenAiWhisperEngine;
