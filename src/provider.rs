//! Upstream data provider: the scheme listing and per-scheme NAV history.
//!
//! [`NavProvider`] is the seam between the SDK and the network. The default
//! [`HttpProvider`] reads the AMFI daily listing for scheme names and the
//! mfapi.in history endpoint for NAV series. Tests and embedders can supply
//! their own implementation through [`MfnavSdkBuilder::provider`](crate::MfnavSdkBuilder::provider).

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config;
use crate::error::{MfnavError, Result};
use crate::models::SchemeEntry;

/// Source of scheme names and raw NAV history payloads.
pub trait NavProvider: Send + Sync {
    /// Return every known scheme, in provider order.
    fn scheme_codes(&self) -> Result<Vec<SchemeEntry>>;

    /// Return the raw history payload for `code`.
    ///
    /// The payload is expected to carry a `data` array of
    /// `{"date": "DD-MM-YYYY", "nav": "..."}` objects and may carry a
    /// `meta` object. Shape validation is left to the caller.
    fn historical_nav(&self, code: &str) -> Result<Value>;
}

// ---------------------------------------------------------------------------
// HttpProvider
// ---------------------------------------------------------------------------

pub struct HttpProvider {
    client: Client,
    schemes_url: String,
    history_base_url: String,
}

impl HttpProvider {
    pub fn new(
        timeout: Duration,
        schemes_url: impl Into<String>,
        history_base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| {
                MfnavError::UpstreamUnavailable(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            schemes_url: schemes_url.into(),
            history_base_url: history_base_url.into(),
        })
    }

    fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "requesting upstream");
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| MfnavError::UpstreamUnavailable(format!("GET {}: {}", url, e)))?;
        resp.text()
            .map_err(|e| MfnavError::UpstreamUnavailable(format!("reading {}: {}", url, e)))
    }
}

impl NavProvider for HttpProvider {
    fn scheme_codes(&self) -> Result<Vec<SchemeEntry>> {
        let body = self.get_text(&self.schemes_url)?;
        Ok(parse_scheme_listing(&body))
    }

    fn historical_nav(&self, code: &str) -> Result<Value> {
        let url = config::history_url(&self.history_base_url, code);
        let body = self.get_text(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            MfnavError::MalformedPayload(format!("history for {} is not JSON: {}", code, e))
        })
    }
}

/// Parse the AMFI `NAVAll.txt` listing into scheme entries.
///
/// Data rows look like `code;isin_growth;isin_reinvest;name;nav;date`.
/// The header row, blank lines and the fund-house/category section headings
/// carry no numeric code and are skipped.
pub fn parse_scheme_listing(text: &str) -> Vec<SchemeEntry> {
    text.lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(';').map(str::trim).collect();
            if fields.len() < 4 {
                return None;
            }
            let code = fields[0];
            let name = fields[3];
            if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) || name.is_empty() {
                return None;
            }
            Some(SchemeEntry::new(code, name))
        })
        .collect()
}
