use serde::{Deserialize, Serialize};

use super::summary::ReportSection;

/// Raw report artifact, persisted as `report_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportData {
    pub report_content: Vec<ReportSection>,
}

/// Presentation-ready artifact, persisted as `summary_data.json`.
///
/// `key_points` carry paragraph-broken content, unlike the raw sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorporateSummary {
    pub summary: String,
    pub key_points: Vec<ReportSection>,
}
