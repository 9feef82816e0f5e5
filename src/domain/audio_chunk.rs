use std::path::PathBuf;
use std::time::Duration;

/// One window of the source audio timeline, written to a scratch file.
///
/// `index` is the position of the window in the timeline and is the only
/// ordering key used when chunk transcripts are reassembled.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    pub index: usize,
    pub path: PathBuf,
    pub duration: Duration,
}

impl AudioChunk {
    pub fn new(index: usize, path: PathBuf, duration: Duration) -> Self {
        Self {
            index,
            path,
            duration,
        }
    }
}
