mod ytdlp_source;

pub use ytdlp_source::YtDlpAudioSource;
