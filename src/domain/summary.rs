use serde::{Deserialize, Serialize};

/// Structured summarization output the chat model is contracted to return.
///
/// Deserialization rejects responses missing any of the three keys, which is
/// what turns a malformed model reply into a retryable parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResult {
    pub headline: String,
    pub key_summary: Vec<ReportSection>,
    pub top_three_topic: Vec<ReportSection>,
}

/// One section of report text. `tag` names an associated image and is only
/// consumed by the downstream template renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSection {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ReportSection {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: None,
        }
    }

    pub fn with_tag(content: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: Some(tag.into()),
        }
    }
}
