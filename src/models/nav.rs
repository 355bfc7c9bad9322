use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::SchemeMeta;
use crate::normalize;

// ---------------------------------------------------------------------------
// NavObservation — One valuation of one scheme on one date
// ---------------------------------------------------------------------------

/// Serializes as `{"date": "YYYY-MM-DD", "nav": <number>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavObservation {
    pub date: NaiveDate,
    pub nav: f64,
}

impl NavObservation {
    pub fn new(date: NaiveDate, nav: f64) -> Self {
        Self { date, nav }
    }

    /// The date in the canonical `YYYY-MM-DD` form.
    pub fn date_string(&self) -> String {
        normalize::format_date(self.date)
    }
}

// ---------------------------------------------------------------------------
// DateRange — Optional inclusive bounds on a history request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with no bounds; every date matches.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parse caller-supplied `YYYY-MM-DD` strings.
    ///
    /// Empty strings count as absent. A start after the end is accepted and
    /// simply matches nothing.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => normalize::parse_filter_date(s).map(Some),
    }
}

// ---------------------------------------------------------------------------
// RowPolicy — What to do with a malformed row in an otherwise valid payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Any malformed row fails the whole payload.
    #[default]
    Strict,
    /// Malformed rows are dropped and counted; the rest are kept.
    SkipInvalid,
}

// ---------------------------------------------------------------------------
// NavHistory — Result of a tagged history fetch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavHistory {
    pub meta: Option<SchemeMeta>,
    /// Sorted most recent first.
    pub observations: Vec<NavObservation>,
    /// Rows dropped under [`RowPolicy::SkipInvalid`]. Always 0 under `Strict`.
    pub skipped_rows: usize,
}

impl NavHistory {
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn latest(&self) -> Option<&NavObservation> {
        self.observations.first()
    }
}
