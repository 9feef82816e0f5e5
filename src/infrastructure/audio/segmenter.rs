use std::path::{Path, PathBuf};
use std::time::Duration;

use super::audio_decoder::{decode_audio_to_pcm, AudioDecodeError};
use crate::domain::AudioChunk;

/// Upstream transcription request-size limit: 20 MiB per chunk.
pub const DEFAULT_CHUNK_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// Splits a source audio file into size-bounded chunks.
///
/// The chunk window is derived from the file's average bitrate: with
/// `bytes_per_ms = file_size / duration_ms`, a window of
/// `chunk_size_bytes / bytes_per_ms` milliseconds of audio stays under the
/// byte target. Windows are consecutive and non-overlapping; the last one
/// may be shorter. Each window is written as a 16 kHz mono 16-bit WAV in
/// the scratch directory, named by its start offset.
pub struct AudioSegmenter {
    chunk_size_bytes: u64,
    scratch_dir: PathBuf,
}

impl AudioSegmenter {
    pub fn new(chunk_size_bytes: u64, scratch_dir: PathBuf) -> Self {
        Self {
            chunk_size_bytes,
            scratch_dir,
        }
    }

    pub fn split(&self, audio_path: &Path) -> Result<Vec<AudioChunk>, SegmenterError> {
        let data = std::fs::read(audio_path).map_err(|e| SegmenterError::SourceUnreadable {
            path: audio_path.display().to_string(),
            source: e,
        })?;
        let file_size = data.len() as u64;

        let pcm = decode_audio_to_pcm(&data)?;
        let duration_ms = pcm.duration_ms();
        if duration_ms == 0 {
            return Err(SegmenterError::EmptyAudio {
                path: audio_path.display().to_string(),
            });
        }

        let bytes_per_ms = file_size as f64 / duration_ms as f64;
        let chunk_length_ms = (self.chunk_size_bytes as f64 / bytes_per_ms) as u64;
        if chunk_length_ms == 0 {
            return Err(SegmenterError::WindowTooSmall {
                chunk_size_bytes: self.chunk_size_bytes,
            });
        }

        std::fs::create_dir_all(&self.scratch_dir).map_err(|e| SegmenterError::ScratchDir {
            path: self.scratch_dir.display().to_string(),
            source: e,
        })?;

        let samples_per_chunk = (chunk_length_ms as usize * pcm.sample_rate as usize) / 1_000;
        let mut chunks = Vec::new();

        for (index, window) in pcm.samples.chunks(samples_per_chunk).enumerate() {
            let start_ms = index as u64 * chunk_length_ms;
            let path = self.scratch_dir.join(format!("chunk_{start_ms}.wav"));
            write_wav(&path, window, pcm.sample_rate)?;

            let window_ms = (window.len() as u64 * 1_000) / pcm.sample_rate as u64;
            chunks.push(AudioChunk::new(
                index,
                path,
                Duration::from_millis(window_ms),
            ));
        }

        Ok(chunks)
    }
}

fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), SegmenterError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer =
        hound::WavWriter::create(path, spec).map_err(|e| SegmenterError::ChunkWrite {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

    for &sample in samples {
        let scaled = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(scaled)
            .map_err(|e| SegmenterError::ChunkWrite {
                path: path.display().to_string(),
                detail: e.to_string(),
            })?;
    }

    writer.finalize().map_err(|e| SegmenterError::ChunkWrite {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SegmenterError {
    #[error("reading {path}: {source}")]
    SourceUnreadable {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] AudioDecodeError),
    #[error("audio at {path} has zero duration")]
    EmptyAudio { path: String },
    #[error("chunk target of {chunk_size_bytes} bytes implies a zero-length window")]
    WindowTooSmall { chunk_size_bytes: u64 },
    #[error("creating scratch dir {path}: {source}")]
    ScratchDir {
        path: String,
        source: std::io::Error,
    },
    #[error("writing chunk {path}: {detail}")]
    ChunkWrite { path: String, detail: String },
}
