//! Tabular (CSV) export of NAV history.
//!
//! The table has two columns, `date` and `nav`, with a header row. An empty
//! history is reported as [`MfnavError::NotFound`] by [`attachment`] so a
//! boundary can tell "no data" apart from a real table.

use crate::config;
use crate::error::{MfnavError, Result};
use crate::models::NavObservation;

/// A CSV body ready to be served as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvAttachment {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

impl CsvAttachment {
    /// Value for a `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.file_name)
    }
}

/// Render observations as CSV, in the order given.
///
/// NAVs keep a fractional part (`101.0`), matching the JSON output.
pub fn history_csv(observations: &[NavObservation]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["date", "nav"])?;
    for obs in observations {
        wtr.write_record([obs.date_string(), format!("{:?}", obs.nav)])?;
    }
    let bytes = wtr.into_inner().map_err(|e| MfnavError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| MfnavError::InvalidArgument(format!("CSV output is not UTF-8: {}", e)))
}

/// File name for an export; falls back to `fund_data` for a blank name.
pub fn file_name(name: Option<&str>) -> String {
    let stem = name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(config::DEFAULT_EXPORT_NAME);
    format!("{}_nav_history.csv", stem)
}

/// Build a downloadable CSV, or `NotFound` when there is nothing to export.
pub fn attachment(name: Option<&str>, observations: &[NavObservation]) -> Result<CsvAttachment> {
    if observations.is_empty() {
        return Err(MfnavError::NotFound("No data found".into()));
    }
    Ok(CsvAttachment {
        file_name: file_name(name),
        content_type: "text/csv",
        body: history_csv(observations)?,
    })
}
