use briefing::infrastructure::audio::{AudioSegmenter, SegmenterError};

/// 16 kHz mono 16-bit PCM WAV bytes.
fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn write_source_wav(dir: &std::path::Path, seconds: usize) -> std::path::PathBuf {
    let samples: Vec<i16> = (0..seconds * 16_000).map(|i| (i % 128) as i16).collect();
    let path = dir.join("source.wav");
    std::fs::write(&path, build_wav(16_000, &samples)).unwrap();
    path
}

#[test]
fn given_five_seconds_of_audio_when_splitting_then_chunk_count_is_ceil_of_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_wav(dir.path(), 5);

    // ~32 bytes of file per millisecond of 16 kHz 16-bit audio, so a 64 kB
    // target implies a window just under two seconds.
    let segmenter = AudioSegmenter::new(64_000, dir.path().join("chunks"));
    let chunks = segmenter.split(&source).unwrap();

    assert_eq!(chunks.len(), 3);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.index, i);
        assert!(chunk.path.exists(), "chunk file should be written");
    }
}

#[test]
fn given_any_split_when_summing_chunk_durations_then_source_duration_is_reproduced() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_wav(dir.path(), 5);

    let segmenter = AudioSegmenter::new(64_000, dir.path().join("chunks"));
    let chunks = segmenter.split(&source).unwrap();

    let total_ms: u128 = chunks.iter().map(|c| c.duration.as_millis()).sum();
    let window_ms = chunks[0].duration.as_millis();
    let diff = (5_000i128 - total_ms as i128).unsigned_abs();
    assert!(
        diff <= window_ms,
        "total {total_ms}ms should match 5000ms within one window ({window_ms}ms)"
    );
}

#[test]
fn given_chunks_when_splitting_then_all_but_last_share_the_window_length() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_wav(dir.path(), 5);

    let segmenter = AudioSegmenter::new(64_000, dir.path().join("chunks"));
    let chunks = segmenter.split(&source).unwrap();

    let window = chunks[0].duration;
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.duration, window);
    }
    assert!(chunks.last().unwrap().duration <= window);
}

#[test]
fn given_tiny_chunk_target_when_splitting_then_fails_fast_instead_of_looping() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_wav(dir.path(), 2);

    let segmenter = AudioSegmenter::new(10, dir.path().join("chunks"));
    let result = segmenter.split(&source);

    assert!(matches!(
        result,
        Err(SegmenterError::WindowTooSmall { chunk_size_bytes: 10 })
    ));
}

#[test]
fn given_sub_millisecond_audio_when_splitting_then_empty_audio_error() {
    let dir = tempfile::tempdir().unwrap();
    let samples = vec![0i16; 8];
    let path = dir.path().join("tiny.wav");
    std::fs::write(&path, build_wav(16_000, &samples)).unwrap();

    let segmenter = AudioSegmenter::new(64_000, dir.path().join("chunks"));
    let result = segmenter.split(&path);

    assert!(matches!(result, Err(SegmenterError::EmptyAudio { .. })));
}

#[test]
fn given_missing_source_file_when_splitting_then_source_unreadable_error() {
    let dir = tempfile::tempdir().unwrap();

    let segmenter = AudioSegmenter::new(64_000, dir.path().join("chunks"));
    let result = segmenter.split(&dir.path().join("nope.wav"));

    assert!(matches!(result, Err(SegmenterError::SourceUnreadable { .. })));
}
