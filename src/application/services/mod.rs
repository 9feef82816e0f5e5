mod caption_service;
mod pipeline;
mod report_assembler;
mod summary_service;
mod transcription_service;

pub use caption_service::{CaptionService, CaptionServiceError, CAPTION_UNAVAILABLE};
pub use pipeline::{PipelineError, PipelineReport, ReportPipeline};
pub use report_assembler::{assemble, write_artifacts, AssemblyError};
pub use summary_service::{SummaryService, SummaryServiceError};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
