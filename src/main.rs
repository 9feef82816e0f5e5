use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use briefing::application::ports::AudioSource;
use briefing::application::retry::RetryPolicy;
use briefing::application::services::{
    CaptionService, ReportPipeline, SummaryService, TranscriptionService,
};
use briefing::config::Settings;
use briefing::infrastructure::audio::AudioSegmenter;
use briefing::infrastructure::downloader::YtDlpAudioSource;
use briefing::infrastructure::llm::{OpenAiChatClient, OpenAiWhisperEngine};
use briefing::infrastructure::observability::{init_tracing, TracingConfig};
use briefing::infrastructure::resources::PromptLibrary;

/// Generate a corporate report briefing from an audio source.
#[derive(Parser, Debug)]
#[command(name = "briefing", version, about)]
struct Cli {
    /// Source URL to download audio from (requires yt-dlp on PATH)
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    url: Option<String>,

    /// Local audio file to analyze instead of downloading
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Override the output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Run the caption-to-section matching pass (result is logged, not merged)
    #[arg(long)]
    match_captions: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(TracingConfig::default());

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(dir) = cli.output_dir {
        settings.output.dir = dir;
    }
    if cli.match_captions {
        settings.pipeline.match_captions = true;
    }

    let prompts = Arc::new(PromptLibrary::load(&settings.resources.prompt_dir)?);

    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.api.api_key.clone(),
        settings.api.base_url.clone(),
        settings.llm.transcription_model.clone(),
    ));
    let chat = Arc::new(OpenAiChatClient::new(
        settings.api.api_key.clone(),
        settings.api.base_url.clone(),
        settings.llm.chat_model.clone(),
    ));

    let segmenter = AudioSegmenter::new(
        settings.audio.chunk_size_bytes,
        settings.output.scratch_dir.clone(),
    );
    let transcription = TranscriptionService::new(
        engine,
        settings.audio.language.clone(),
        RetryPolicy::fixed(3, std::time::Duration::from_secs(20)),
    );
    let summary = SummaryService::new(
        Arc::clone(&chat),
        RetryPolicy::exponential_jitter(
            10,
            std::time::Duration::from_secs(1),
            std::time::Duration::from_secs(40),
        ),
    );
    let captions = CaptionService::new(chat, prompts.caption_prompt().to_string());

    let pipeline = ReportPipeline::new(
        segmenter,
        transcription,
        summary,
        captions,
        Arc::clone(&prompts),
        settings.resources.image_dir.clone(),
        settings.output.dir.clone(),
        settings.pipeline.match_captions,
    );

    let audio_path = match (&cli.input, &cli.url) {
        (Some(path), _) => path.clone(),
        (None, Some(url)) => {
            let source = YtDlpAudioSource::new(settings.output.dir.join("audio"));
            source.fetch(url).await?.path
        }
        (None, None) => unreachable!("clap enforces url or input"),
    };

    let report = pipeline.run(&audio_path).await?;

    tracing::info!(
        transcript = %report.transcript_path.display(),
        report = %report.report_path.display(),
        summary = %report.summary_path.display(),
        "Briefing complete"
    );

    Ok(())
}
