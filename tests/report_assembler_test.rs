use briefing::application::services::{assemble, write_artifacts};
use briefing::domain::{ReportSection, SummaryResult};

fn summary_fixture() -> SummaryResult {
    SummaryResult {
        headline: "H".to_string(),
        key_summary: vec![ReportSection::new("x")],
        top_three_topic: vec![ReportSection::new("A. B. C.")],
    }
}

#[test]
fn given_summary_when_assembling_then_raw_artifact_carries_key_summary_unchanged() {
    let (report, _) = assemble(summary_fixture(), 2);

    assert_eq!(report.report_content, vec![ReportSection::new("x")]);
}

#[test]
fn given_summary_when_assembling_then_corporate_key_points_are_paragraph_broken() {
    let (_, corporate) = assemble(summary_fixture(), 2);

    assert_eq!(corporate.summary, "H");
    assert_eq!(corporate.key_points[0].content, "A. B.\n\nC.");
}

#[test]
fn given_artifacts_when_writing_then_json_files_land_in_output_dir_with_expected_shape() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let (report, corporate) = assemble(summary_fixture(), 2);

    let (report_path, summary_path) =
        write_artifacts(&output_dir, &report, &corporate).unwrap();

    assert_eq!(report_path, output_dir.join("report_data.json"));
    assert_eq!(summary_path, output_dir.join("summary_data.json"));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({"report_content": [{"content": "x"}]}));

    let corp: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(
        corp,
        serde_json::json!({
            "summary": "H",
            "key_points": [{"content": "A. B.\n\nC."}]
        })
    );
}

#[test]
fn given_tagged_section_when_writing_then_tag_is_serialized() {
    let dir = tempfile::tempdir().unwrap();
    let summary = SummaryResult {
        headline: "H".to_string(),
        key_summary: vec![ReportSection::with_tag("x", "chart.png")],
        top_three_topic: vec![],
    };
    let (report, corporate) = assemble(summary, 2);

    let (report_path, _) = write_artifacts(dir.path(), &report, &corporate).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(raw["report_content"][0]["tag"], "chart.png");
}
