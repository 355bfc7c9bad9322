//! AMFI listing parsing and HTTP provider construction.

use std::time::Duration;

use mfnav_sdk::provider::parse_scheme_listing;
use mfnav_sdk::{config, HttpProvider, MfnavSdk, SchemeEntry};

const LISTING: &str = "\
Scheme Code;ISIN Div Payout/ ISIN Growth;ISIN Div Reinvestment;Scheme Name;Net Asset Value;Date\r
\r
Open Ended Schemes(Debt Scheme - Banking and PSU Fund)\r
\r
Aditya Birla Sun Life Mutual Fund\r
\r
119551;INF209KA12Z1;INF209KA13Z9;Aditya Birla Sun Life Banking & PSU Debt Fund  - DIRECT - IDCW;105.4691;18-Oct-2024\r
120437;INF846K01EW2;-;Axis Bluechip Fund - Direct Plan - Growth;63.45;18-Oct-2024\r
";

#[test]
fn listing_keeps_only_data_rows() {
    let entries = parse_scheme_listing(LISTING);
    assert_eq!(
        entries,
        vec![
            SchemeEntry::new(
                "119551",
                "Aditya Birla Sun Life Banking & PSU Debt Fund  - DIRECT - IDCW"
            ),
            SchemeEntry::new("120437", "Axis Bluechip Fund - Direct Plan - Growth"),
        ]
    );
}

#[test]
fn listing_skips_rows_with_non_numeric_code_or_blank_name() {
    let text = "ABC;x;y;Name;1;d\n123;x;y;;1;d\n124;x;y\n";
    assert!(parse_scheme_listing(text).is_empty());
}

#[test]
fn empty_listing_yields_no_entries() {
    assert!(parse_scheme_listing("").is_empty());
}

#[test]
fn history_url_joins_base_and_code() {
    assert_eq!(
        config::history_url("https://api.mfapi.in/mf/", "119551"),
        "https://api.mfapi.in/mf/119551"
    );
}

#[test]
fn http_provider_builds_without_network() {
    let provider = HttpProvider::new(
        Duration::from_secs(5),
        config::SCHEMES_URL,
        config::HISTORY_BASE_URL,
    );
    assert!(provider.is_ok());
}

#[test]
fn default_sdk_builds_lazily() {
    let sdk = MfnavSdk::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    assert!(!sdk.directory().is_loaded());
    assert_eq!(
        sdk.to_string(),
        "MfnavSdk(directory_loaded=false, row_policy=Strict)"
    );
}
