//! Historical NAV queries.
//!
//! A request runs fetch, parse, filter, sort in that order:
//!
//! 1. the raw payload for the scheme is fetched from the provider;
//! 2. each `{"date": "DD-MM-YYYY", "nav": "..."}` row is parsed according to
//!    the configured [`RowPolicy`];
//! 3. rows outside the inclusive [`DateRange`] are dropped;
//! 4. the rest are stably sorted most recent first.
//!
//! [`NavQuery::fetch`] reports upstream and payload failures as errors.
//! [`NavQuery::history`] logs them and returns an empty series instead, so
//! the caller decides which behavior it wants.

use serde_json::Value;

use crate::error::{MfnavError, Result};
use crate::models::{DateRange, NavHistory, NavObservation, RowPolicy, SchemeMeta};
use crate::normalize;
use crate::provider::NavProvider;

// ---------------------------------------------------------------------------
// NavQuery
// ---------------------------------------------------------------------------

/// Query interface for per-scheme NAV history.
pub struct NavQuery<'a> {
    provider: &'a dyn NavProvider,
    policy: RowPolicy,
}

impl<'a> NavQuery<'a> {
    pub fn new(provider: &'a dyn NavProvider, policy: RowPolicy) -> Self {
        Self { provider, policy }
    }

    /// Fetch, filter and sort the history of `code`.
    ///
    /// Fails with [`MfnavError::UpstreamUnavailable`] when the provider
    /// cannot be reached and [`MfnavError::MalformedPayload`] when the
    /// payload cannot be read.
    pub fn fetch(&self, code: &str, range: &DateRange) -> Result<NavHistory> {
        let payload = self.provider.historical_nav(code)?;
        let history = build_history(&payload, range, self.policy)?;
        if history.skipped_rows > 0 {
            tracing::warn!(
                code,
                skipped = history.skipped_rows,
                "dropped malformed NAV rows"
            );
        }
        Ok(history)
    }

    /// Like [`fetch`](Self::fetch), but any failure is logged and yields an
    /// empty series.
    pub fn history(&self, code: &str, range: &DateRange) -> Vec<NavObservation> {
        match self.fetch(code, range) {
            Ok(history) => history.observations,
            Err(e) => {
                tracing::warn!(code, error = %e, "NAV history unavailable, returning no data");
                Vec::new()
            }
        }
    }

    /// Most recent observation for `code`, if any.
    pub fn latest(&self, code: &str) -> Result<Option<NavObservation>> {
        let history = self.fetch(code, &DateRange::all())?;
        Ok(history.latest().copied())
    }

    /// Scheme metadata carried by the history payload.
    pub fn meta(&self, code: &str) -> Result<Option<SchemeMeta>> {
        let payload = self.provider.historical_nav(code)?;
        Ok(parse_meta(&payload))
    }
}

/// Turn a raw history payload into a filtered, sorted [`NavHistory`].
pub fn build_history(payload: &Value, range: &DateRange, policy: RowPolicy) -> Result<NavHistory> {
    let rows = payload
        .get("data")
        .ok_or_else(|| MfnavError::MalformedPayload("payload has no 'data' list".into()))?
        .as_array()
        .ok_or_else(|| MfnavError::MalformedPayload("'data' is not a list".into()))?;

    let mut observations = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0;
    for (i, row) in rows.iter().enumerate() {
        match normalize::parse_raw_entry(row) {
            Ok(obs) => {
                if range.contains(obs.date) {
                    observations.push(obs);
                }
            }
            Err(e) => match policy {
                RowPolicy::Strict => {
                    let reason = match e {
                        MfnavError::MalformedPayload(msg) => msg,
                        other => other.to_string(),
                    };
                    return Err(MfnavError::MalformedPayload(format!("row {}: {}", i, reason)));
                }
                RowPolicy::SkipInvalid => {
                    tracing::debug!(row = i, error = %e, "skipping malformed NAV row");
                    skipped_rows += 1;
                }
            },
        }
    }

    // Stable, so duplicate dates keep feed order.
    observations.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(NavHistory {
        meta: parse_meta(payload),
        observations,
        skipped_rows,
    })
}

fn parse_meta(payload: &Value) -> Option<SchemeMeta> {
    let raw = payload.get("meta")?;
    match serde_json::from_value::<SchemeMeta>(raw.clone()) {
        Ok(meta) if !meta.is_empty() => Some(meta),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unreadable scheme metadata");
            None
        }
    }
}
