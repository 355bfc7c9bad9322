//! Shared test fixtures for the SDK integration tests.
//!
//! Provides `FakeProvider`, an in-memory `NavProvider` that counts upstream
//! calls and can be told to fail, plus the small sample scheme list and NAV
//! history used across the test files.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mfnav_sdk::{MfnavError, MfnavSdk, NavProvider, Result, RowPolicy, SchemeEntry};
use serde_json::Value;

#[derive(Default)]
struct FakeState {
    schemes: Vec<SchemeEntry>,
    histories: Mutex<HashMap<String, Value>>,
    scheme_calls: AtomicUsize,
    history_calls: AtomicUsize,
    /// Number of upcoming `scheme_codes` calls that should fail.
    scheme_failures: AtomicUsize,
}

/// Cloneable handle; every clone shares the same counters and data.
#[derive(Clone, Default)]
pub struct FakeProvider {
    state: Arc<FakeState>,
}

impl FakeProvider {
    pub fn new(schemes: Vec<SchemeEntry>) -> Self {
        Self {
            state: Arc::new(FakeState {
                schemes,
                ..Default::default()
            }),
        }
    }

    pub fn with_history(self, code: &str, payload: Value) -> Self {
        self.state
            .histories
            .lock()
            .unwrap()
            .insert(code.to_string(), payload);
        self
    }

    pub fn fail_next_scheme_loads(&self, n: usize) {
        self.state.scheme_failures.store(n, Ordering::SeqCst);
    }

    pub fn scheme_calls(&self) -> usize {
        self.state.scheme_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.state.history_calls.load(Ordering::SeqCst)
    }
}

impl NavProvider for FakeProvider {
    fn scheme_codes(&self) -> Result<Vec<SchemeEntry>> {
        self.state.scheme_calls.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .state
            .scheme_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(MfnavError::UpstreamUnavailable("connection refused".into()));
        }
        Ok(self.state.schemes.clone())
    }

    fn historical_nav(&self, code: &str) -> Result<Value> {
        self.state.history_calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .histories
            .lock()
            .unwrap()
            .get(code)
            .cloned()
            .ok_or_else(|| MfnavError::UpstreamUnavailable(format!("no route to {}", code)))
    }
}

pub fn sample_schemes() -> Vec<SchemeEntry> {
    vec![
        SchemeEntry::new("1001", "Axis Bluechip Fund"),
        SchemeEntry::new("1002", "SBI Small Cap Fund"),
        SchemeEntry::new("1003", "HDFC Top 100"),
    ]
}

pub fn sample_history() -> Value {
    serde_json::json!({
        "meta": {
            "fund_house": "Axis Mutual Fund",
            "scheme_type": "Open Ended Schemes",
            "scheme_category": "Equity Scheme - Large Cap Fund",
            "scheme_code": 1001,
            "scheme_name": "Axis Bluechip Fund"
        },
        "data": [
            {"date": "01-01-2023", "nav": "100.50"},
            {"date": "02-01-2023", "nav": "101.00"},
            {"date": "03-01-2023", "nav": "99.50"}
        ],
        "status": "SUCCESS"
    })
}

/// Sample provider: three schemes, history for `1001` only.
pub fn sample_provider() -> FakeProvider {
    FakeProvider::new(sample_schemes()).with_history("1001", sample_history())
}

pub fn sdk_with(provider: &FakeProvider) -> MfnavSdk {
    MfnavSdk::builder()
        .provider(provider.clone())
        .build()
        .unwrap()
}

pub fn sdk_with_policy(provider: &FakeProvider, policy: RowPolicy) -> MfnavSdk {
    MfnavSdk::builder()
        .provider(provider.clone())
        .row_policy(policy)
        .build()
        .unwrap()
}
