use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{ChatClient, TranscriptionEngine};
use crate::application::services::{
    assemble, write_artifacts, AssemblyError, CaptionService, CaptionServiceError, SummaryService,
    SummaryServiceError, TranscriptionService, TranscriptionServiceError,
};
use crate::infrastructure::audio::{AudioSegmenter, SegmenterError};
use crate::infrastructure::resources::PromptLibrary;
use crate::infrastructure::text_processing::DEFAULT_SENTENCES_PER_PARAGRAPH;

/// Locations of everything a pipeline run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub transcript_path: PathBuf,
    pub report_path: PathBuf,
    pub summary_path: PathBuf,
}

/// The sequential report pipeline: segment, transcribe, caption, summarize,
/// assemble. One request in flight at a time; a failed stage aborts the run
/// (artifacts already written by earlier stages are left as-is).
pub struct ReportPipeline<E, C>
where
    E: TranscriptionEngine,
    C: ChatClient,
{
    segmenter: AudioSegmenter,
    transcription: TranscriptionService<E>,
    summary: SummaryService<C>,
    captions: CaptionService<C>,
    prompts: Arc<PromptLibrary>,
    image_dir: PathBuf,
    output_dir: PathBuf,
    match_captions: bool,
}

impl<E, C> ReportPipeline<E, C>
where
    E: TranscriptionEngine,
    C: ChatClient,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        segmenter: AudioSegmenter,
        transcription: TranscriptionService<E>,
        summary: SummaryService<C>,
        captions: CaptionService<C>,
        prompts: Arc<PromptLibrary>,
        image_dir: PathBuf,
        output_dir: PathBuf,
        match_captions: bool,
    ) -> Self {
        Self {
            segmenter,
            transcription,
            summary,
            captions,
            prompts,
            image_dir,
            output_dir,
            match_captions,
        }
    }

    pub async fn run(&self, audio_path: &Path) -> Result<PipelineReport, PipelineError> {
        tracing::info!(audio = %audio_path.display(), "Splitting audio into chunks");
        let chunks = self.segmenter.split(audio_path)?;
        tracing::info!(chunks = chunks.len(), "Audio segmented");

        let transcript = self.transcription.transcribe_chunks(&chunks).await?;

        std::fs::create_dir_all(&self.output_dir).map_err(|e| PipelineError::TranscriptWrite {
            path: self.output_dir.display().to_string(),
            source: e,
        })?;
        let transcript_path = self.output_dir.join("stt_result.txt");
        std::fs::write(&transcript_path, transcript.text()).map_err(|e| {
            PipelineError::TranscriptWrite {
                path: transcript_path.display().to_string(),
                source: e,
            }
        })?;
        tracing::info!(path = %transcript_path.display(), "Transcript written");

        tracing::info!(dir = %self.image_dir.display(), "Captioning report images");
        let captions = self.captions.caption_directory(&self.image_dir).await?;
        tracing::info!(images = captions.len(), "Image captioning complete");

        tracing::info!("Summarizing transcript");
        let summary = self
            .summary
            .summarize(
                self.prompts.summary_instruction(),
                &transcript.text(),
                self.prompts.synonym_dictionary(),
            )
            .await?;

        // Caption-to-section matching is computed on request but never merged
        // into the artifacts; downstream consumers do not read it yet.
        if self.match_captions {
            let matched = self
                .summary
                .match_captions(
                    self.prompts.tag_instruction(),
                    &summary.key_summary,
                    &captions,
                )
                .await?;
            tracing::debug!(matched = %matched, "Caption matching result (not merged)");
        }

        let (report, corporate) = assemble(summary, DEFAULT_SENTENCES_PER_PARAGRAPH);
        let (report_path, summary_path) = write_artifacts(&self.output_dir, &report, &corporate)?;

        tracing::info!(
            report = %report_path.display(),
            summary = %summary_path.display(),
            "Report artifacts written"
        );

        Ok(PipelineReport {
            transcript_path,
            report_path,
            summary_path,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("segmentation: {0}")]
    Segmentation(#[from] SegmenterError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionServiceError),
    #[error("captioning: {0}")]
    Captioning(#[from] CaptionServiceError),
    #[error("summarization: {0}")]
    Summarization(#[from] SummaryServiceError),
    #[error("assembly: {0}")]
    Assembly(#[from] AssemblyError),
    #[error("writing transcript to {path}: {source}")]
    TranscriptWrite {
        path: String,
        source: std::io::Error,
    },
}
