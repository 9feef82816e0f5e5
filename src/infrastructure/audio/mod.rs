pub mod audio_decoder;
mod segmenter;

pub use audio_decoder::{decode_audio_to_pcm, PcmAudio};
pub use segmenter::{AudioSegmenter, SegmenterError, DEFAULT_CHUNK_SIZE_BYTES};
