//! Service-layer tests.

use ff_app::{
    ReportRequest, conservation_summary, default_config, ensure_balanced, flow_table,
    generate_report,
};
use ff_statement::fy2024;

#[test]
fn generate_report_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join(fy2024::OUTPUT_FILE);

    let response = generate_report(&ReportRequest {
        output: &output,
        config: default_config(),
        open: false,
    })
    .unwrap();

    assert_eq!(response.output, output);
    assert_eq!(response.node_count, 19);
    assert_eq!(response.link_count, 18);
    assert!(response.bytes > 0);
    assert_eq!(std::fs::metadata(&output).unwrap().len(), response.bytes);
}

#[test]
fn generate_report_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join(fy2024::OUTPUT_FILE);
    std::fs::write(&output, "stale").unwrap();

    generate_report(&ReportRequest {
        output: &output,
        config: default_config(),
        open: false,
    })
    .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("Net Income"));
    assert!(!content.starts_with("stale"));
}

#[test]
fn generate_report_surfaces_write_errors() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join(fy2024::OUTPUT_FILE);

    let err = generate_report(&ReportRequest {
        output: &output,
        config: default_config(),
        open: false,
    })
    .unwrap_err();

    assert!(matches!(err, ff_app::AppError::Render(_)));
    assert!(!output.exists());
}

#[test]
fn conservation_summary_for_fy2024() {
    let graph = fy2024::graph().unwrap();
    let rows = conservation_summary(&graph, &fy2024::REPORTED);

    let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Cost of Service",
            "Net Non-interest Revenue",
            "Net Revenue",
            "Operating Profit",
            "Pre-tax Income",
        ]
    );
    assert!(ensure_balanced(&rows).is_ok());

    let operating = &rows[3];
    assert_eq!(operating.reported, Some(fy2024::OPERATING_PROF));
    assert_eq!(operating.inflow, fy2024::OPERATING_PROF);
}

#[test]
fn flow_table_serializes_money_as_millions() {
    let graph = fy2024::graph().unwrap();
    let table = flow_table(&graph);
    assert_eq!(table.nodes.len(), 19);
    assert_eq!(table.links.len(), 18);

    let json = serde_json::to_value(&table).unwrap();
    let last = &json["links"][17];
    assert_eq!(last["source_label"], "Pre-tax Income");
    assert_eq!(last["target_label"], "Net Income");
    assert_eq!(last["magnitude"], 925.2);
    assert_eq!(last["kind"], "revenue");
    assert_eq!(json["nodes"][1]["category"], "cost-block");
}
