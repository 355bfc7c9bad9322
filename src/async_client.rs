//! Async wrapper around [`MfnavSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the upstream.
//!
//! # Example
//!
//! ```no_run
//! use mfnav_sdk::{AsyncMfnavSdk, DateRange};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncMfnavSdk::builder().build().await.unwrap();
//!
//!     let hits = sdk.search("axis").await.unwrap();
//!     let navs = sdk.history(&hits[0].code, DateRange::all()).await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{MfnavError, Result};
use crate::models::{DateRange, NavHistory, NavObservation, RowPolicy, SchemeEntry};
use crate::provider::NavProvider;
use crate::MfnavSdk;

// ---------------------------------------------------------------------------
// AsyncMfnavSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncMfnavSdk`] instance.
#[derive(Default)]
pub struct AsyncMfnavSdkBuilder {
    inner: crate::MfnavSdkBuilder,
}

impl AsyncMfnavSdkBuilder {
    /// Set the HTTP request timeout for upstream calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Override the URL of the scheme listing.
    pub fn schemes_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.schemes_url(url);
        self
    }

    /// Override the base URL of the NAV history endpoint.
    pub fn history_base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.history_base_url(url);
        self
    }

    /// Choose how malformed history rows are handled.
    pub fn row_policy(mut self, policy: RowPolicy) -> Self {
        self.inner = self.inner.row_policy(policy);
        self
    }

    /// Use a custom provider instead of the built-in HTTP one.
    pub fn provider<P: NavProvider + 'static>(mut self, provider: P) -> Self {
        self.inner = self.inner.provider(provider);
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncMfnavSdk> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = inner.build()?;
            Ok(AsyncMfnavSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| MfnavError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncMfnavSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`MfnavSdk`].
///
/// Cloning is cheap; clones share the same scheme directory cache.
#[derive(Clone)]
pub struct AsyncMfnavSdk {
    inner: Arc<MfnavSdk>,
}

impl AsyncMfnavSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncMfnavSdkBuilder {
        AsyncMfnavSdkBuilder::default()
    }

    /// Wrap an already built SDK.
    pub fn from_sdk(sdk: MfnavSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mfnav_sdk::AsyncMfnavSdk;
    /// # async fn example() -> mfnav_sdk::Result<()> {
    /// # let sdk = AsyncMfnavSdk::builder().build().await?;
    /// let count = sdk.run(|s| s.schemes().count()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&MfnavSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| MfnavError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Search schemes by name asynchronously.
    pub async fn search(&self, keyword: &str) -> Result<Vec<SchemeEntry>> {
        let keyword = keyword.to_string();
        self.run(move |s| s.schemes().search(&keyword)).await
    }

    /// Tagged history fetch; see [`NavQuery::fetch`](crate::queries::nav::NavQuery::fetch).
    pub async fn fetch(&self, code: &str, range: DateRange) -> Result<NavHistory> {
        let code = code.to_string();
        self.run(move |s| s.nav().fetch(&code, &range)).await
    }

    /// Degrading history fetch; upstream failures yield an empty series.
    pub async fn history(&self, code: &str, range: DateRange) -> Result<Vec<NavObservation>> {
        let code = code.to_string();
        self.run(move |s| Ok(s.nav().history(&code, &range))).await
    }

    /// Reload the scheme directory, keeping the old copy on failure.
    pub async fn refresh(&self) -> Result<usize> {
        self.run(|s| s.refresh()).await
    }
}
