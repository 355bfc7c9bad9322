//! Mutual fund NAV SDK for Rust.
//!
//! Search mutual fund schemes by name and retrieve their historical Net Asset
//! Value series, optionally filtered to an inclusive date range and exported
//! as CSV. Scheme names come from the AMFI daily listing and NAV history from
//! mfapi.in, both through a pluggable [`NavProvider`].
//!
//! # Quick start
//!
//! ```no_run
//! use mfnav_sdk::{DateRange, MfnavSdk};
//!
//! let sdk = MfnavSdk::builder().build().unwrap();
//!
//! // Find a scheme
//! let hits = sdk.schemes().search("bluechip").unwrap();
//!
//! // Pull its history for 2023
//! let range = DateRange::parse(Some("2023-01-01"), Some("2023-12-31")).unwrap();
//! let navs = sdk.nav().history(&hits[0].code, &range);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncMfnavSdk;
pub use directory::{SchemeDirectory, SchemeMap};
pub use error::{MfnavError, Result};
pub use export::CsvAttachment;
pub use models::{DateRange, NavHistory, NavObservation, RowPolicy, SchemeEntry, SchemeMeta};
pub use provider::{HttpProvider, NavProvider};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// MfnavSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`MfnavSdk`] instance.
///
/// Use [`MfnavSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MfnavSdkBuilder::build) to create the SDK.
pub struct MfnavSdkBuilder {
    timeout: Duration,
    schemes_url: String,
    history_base_url: String,
    row_policy: RowPolicy,
    provider: Option<Box<dyn NavProvider>>,
}

impl Default for MfnavSdkBuilder {
    fn default() -> Self {
        Self {
            timeout: config::default_timeout(),
            schemes_url: config::SCHEMES_URL.to_string(),
            history_base_url: config::HISTORY_BASE_URL.to_string(),
            row_policy: RowPolicy::default(),
            provider: None,
        }
    }
}

impl MfnavSdkBuilder {
    /// Set the HTTP request timeout for upstream calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the URL of the scheme listing.
    pub fn schemes_url(mut self, url: impl Into<String>) -> Self {
        self.schemes_url = url.into();
        self
    }

    /// Override the base URL of the NAV history endpoint.
    pub fn history_base_url(mut self, url: impl Into<String>) -> Self {
        self.history_base_url = url.into();
        self
    }

    /// Choose how malformed history rows are handled.
    ///
    /// Defaults to [`RowPolicy::Strict`].
    pub fn row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }

    /// Use a custom provider instead of the built-in HTTP one.
    ///
    /// When set, `timeout` and the URL overrides are ignored.
    pub fn provider<P: NavProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the SDK.
    ///
    /// No network traffic happens here; the scheme directory is loaded on
    /// first search.
    pub fn build(self) -> Result<MfnavSdk> {
        let provider = match self.provider {
            Some(p) => p,
            None => Box::new(HttpProvider::new(
                self.timeout,
                self.schemes_url,
                self.history_base_url,
            )?),
        };
        Ok(MfnavSdk {
            provider,
            directory: SchemeDirectory::new(),
            row_policy: self.row_policy,
        })
    }
}

// ---------------------------------------------------------------------------
// MfnavSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns the provider and the scheme directory cache, and exposes query
/// interfaces as lightweight borrowing wrappers. `MfnavSdk` is `Send + Sync`
/// and can be shared across request threads behind an `Arc`.
pub struct MfnavSdk {
    provider: Box<dyn NavProvider>,
    directory: SchemeDirectory,
    row_policy: RowPolicy,
}

impl MfnavSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> MfnavSdkBuilder {
        MfnavSdkBuilder::default()
    }

    /// Access the scheme search interface.
    pub fn schemes(&self) -> queries::schemes::SchemeQuery<'_> {
        queries::schemes::SchemeQuery::new(&self.directory, self.provider.as_ref())
    }

    /// Access the NAV history interface.
    pub fn nav(&self) -> queries::nav::NavQuery<'_> {
        queries::nav::NavQuery::new(self.provider.as_ref(), self.row_policy)
    }

    /// Return the underlying scheme directory cache.
    pub fn directory(&self) -> &SchemeDirectory {
        &self.directory
    }

    pub fn row_policy(&self) -> RowPolicy {
        self.row_policy
    }

    /// Fetch the scheme directory again and replace the cached copy.
    ///
    /// Returns the number of schemes after the reload. On failure the
    /// previously cached directory, if any, is kept.
    pub fn refresh(&self) -> Result<usize> {
        let map = self.directory.reload(self.provider.as_ref())?;
        Ok(map.len())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MfnavSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MfnavSdk(directory_loaded={}, row_policy={:?})",
            self.directory.is_loaded(),
            self.row_policy
        )
    }
}
