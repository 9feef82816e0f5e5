mod audio_chunk;
mod report;
mod source_title;
mod summary;
mod synonym_dictionary;
mod transcript;

pub use audio_chunk::AudioChunk;
pub use report::{CorporateSummary, ReportData};
pub use source_title::{canonical_base_name, sanitize_filename};
pub use summary::{ReportSection, SummaryResult};
pub use synonym_dictionary::SynonymDictionary;
pub use transcript::Transcript;
