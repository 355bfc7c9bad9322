use std::time::Duration;

/// AMFI daily NAV listing; the source of the scheme code to name mapping.
pub const SCHEMES_URL: &str = "https://www.amfiindia.com/spages/NAVAll.txt";

/// mfapi.in scheme history endpoint, queried as `{HISTORY_BASE_URL}/{code}`.
pub const HISTORY_BASE_URL: &str = "https://api.mfapi.in/mf";

pub const USER_AGENT: &str = concat!("mfnav-sdk/", env!("CARGO_PKG_VERSION"));

/// Input date format used by the upstream history feed.
pub const FEED_DATE_FORMAT: &str = "%d-%m-%Y";

/// Canonical date format for everything the SDK emits and accepts from callers.
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_EXPORT_NAME: &str = "fund_data";

pub fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

pub fn history_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}
