use std::path::{Path, PathBuf};

use crate::domain::{CorporateSummary, ReportData, SummaryResult};
use crate::infrastructure::text_processing::break_sections_into_paragraphs;

/// Reshape the summarization output into the two report artifacts.
///
/// The raw artifact carries `key_summary` untouched; the corporate artifact
/// takes the headline and the paragraph-broken top three topics.
pub fn assemble(
    summary: SummaryResult,
    sentences_per_paragraph: usize,
) -> (ReportData, CorporateSummary) {
    let key_points =
        break_sections_into_paragraphs(summary.top_three_topic, sentences_per_paragraph);

    let report = ReportData {
        report_content: summary.key_summary,
    };
    let corporate = CorporateSummary {
        summary: summary.headline,
        key_points,
    };

    (report, corporate)
}

/// Persist both artifacts as pretty-printed JSON in the output directory.
///
/// Returns `(report_data.json path, summary_data.json path)`.
pub fn write_artifacts(
    output_dir: &Path,
    report: &ReportData,
    corporate: &CorporateSummary,
) -> Result<(PathBuf, PathBuf), AssemblyError> {
    std::fs::create_dir_all(output_dir).map_err(|e| AssemblyError::Io {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let report_path = output_dir.join("report_data.json");
    let summary_path = output_dir.join("summary_data.json");

    write_json(&report_path, report)?;
    write_json(&summary_path, corporate)?;

    Ok((report_path, summary_path))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), AssemblyError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| AssemblyError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("serializing artifact: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
