//! Date and value normalization shared by the history pipeline and the
//! boundary helpers.
//!
//! The upstream feed writes dates as `DD-MM-YYYY` and NAVs as decimal
//! strings. Everything the SDK hands back uses `YYYY-MM-DD` and `f64`.

use chrono::NaiveDate;
use serde_json::Value;

use crate::config;
use crate::error::{MfnavError, Result};
use crate::models::NavObservation;

/// Parse a feed date. Only day-month-year is accepted.
pub fn parse_feed_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), config::FEED_DATE_FORMAT).map_err(|e| {
        MfnavError::MalformedPayload(format!("invalid feed date '{}': {}", raw, e))
    })
}

/// Parse a caller-supplied filter date in `YYYY-MM-DD` form.
pub fn parse_filter_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), config::OUTPUT_DATE_FORMAT).map_err(|_| {
        MfnavError::InvalidArgument(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            raw
        ))
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(config::OUTPUT_DATE_FORMAT).to_string()
}

/// Parse a NAV value from a JSON string or number.
///
/// Rejects negative and non-finite values.
pub fn parse_nav(raw: &Value) -> Result<f64> {
    let nav = match raw {
        Value::String(s) => s.trim().parse::<f64>().map_err(|e| {
            MfnavError::MalformedPayload(format!("invalid nav '{}': {}", s, e))
        })?,
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            MfnavError::MalformedPayload(format!("nav {} is not representable", n))
        })?,
        other => {
            return Err(MfnavError::MalformedPayload(format!(
                "nav must be a string or number, got {}",
                other
            )))
        }
    };

    if !nav.is_finite() || nav < 0.0 {
        return Err(MfnavError::MalformedPayload(format!(
            "nav {} is out of range",
            nav
        )));
    }
    Ok(nav)
}

/// Parse one raw `{"date": "DD-MM-YYYY", "nav": "..."}` entry.
pub fn parse_raw_entry(raw: &Value) -> Result<NavObservation> {
    let obj = raw.as_object().ok_or_else(|| {
        MfnavError::MalformedPayload(format!("history entry is not an object: {}", raw))
    })?;

    let date = obj
        .get("date")
        .and_then(|v| v.as_str())
        .ok_or_else(|| MfnavError::MalformedPayload("history entry missing 'date'".into()))?;
    let nav = obj
        .get("nav")
        .ok_or_else(|| MfnavError::MalformedPayload("history entry missing 'nav'".into()))?;

    Ok(NavObservation::new(parse_feed_date(date)?, parse_nav(nav)?))
}
