//! CSV export of NAV history.

mod common;

use chrono::NaiveDate;
use mfnav_sdk::export::{attachment, file_name, history_csv};
use mfnav_sdk::{DateRange, MfnavError, NavObservation};

#[test]
fn csv_has_header_and_one_row_per_observation() {
    let provider = common::sample_provider();
    let sdk = common::sdk_with(&provider);

    let data = sdk.nav().history("1001", &DateRange::all());
    let csv = history_csv(&data).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec!["date,nav", "2023-01-03,99.5", "2023-01-02,101.0", "2023-01-01,100.5"]
    );
}

#[test]
fn empty_history_renders_header_only() {
    assert_eq!(history_csv(&[]).unwrap(), "date,nav\n");
}

#[test]
fn attachment_of_empty_history_is_not_found() {
    let err = attachment(Some("axis"), &[]).unwrap_err();
    assert!(matches!(err, MfnavError::NotFound(_)));
}

#[test]
fn attachment_names_file_and_sets_content_type() {
    let obs = [NavObservation::new(
        NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        101.0,
    )];

    let csv = attachment(Some("axis_bluechip"), &obs).unwrap();
    assert_eq!(csv.file_name, "axis_bluechip_nav_history.csv");
    assert_eq!(csv.content_type, "text/csv");
    assert_eq!(
        csv.content_disposition(),
        "attachment; filename=axis_bluechip_nav_history.csv"
    );
    assert_eq!(csv.body, "date,nav\n2023-01-02,101.0\n");
}

#[test]
fn blank_export_name_falls_back_to_default() {
    assert_eq!(file_name(None), "fund_data_nav_history.csv");
    assert_eq!(file_name(Some("  ")), "fund_data_nav_history.csv");
}

#[test]
fn upstream_failure_exports_as_not_found() {
    let provider = common::sample_provider();
    let sdk = common::sdk_with(&provider);

    let data = sdk.nav().history("404", &DateRange::all());
    assert!(matches!(attachment(None, &data), Err(MfnavError::NotFound(_))));
}
