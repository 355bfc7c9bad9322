//! Scheme directory queries: name search and code lookup.

use crate::directory::SchemeDirectory;
use crate::error::Result;
use crate::models::SchemeEntry;
use crate::provider::NavProvider;

// ---------------------------------------------------------------------------
// SchemeQuery
// ---------------------------------------------------------------------------

/// Query interface over the cached scheme directory.
///
/// Every method loads the directory on first use; after that all lookups are
/// in memory.
pub struct SchemeQuery<'a> {
    directory: &'a SchemeDirectory,
    provider: &'a dyn NavProvider,
}

impl<'a> SchemeQuery<'a> {
    pub fn new(directory: &'a SchemeDirectory, provider: &'a dyn NavProvider) -> Self {
        Self {
            directory,
            provider,
        }
    }

    /// Schemes whose name contains `keyword`, case-insensitively, in provider
    /// order.
    ///
    /// An empty keyword returns every scheme. Callers that want "no query, no
    /// results" must check before calling.
    pub fn search(&self, keyword: &str) -> Result<Vec<SchemeEntry>> {
        let map = self.directory.ensure_loaded(self.provider)?;
        Ok(map.search(keyword))
    }

    /// Resolve a scheme code.
    pub fn get(&self, code: &str) -> Result<Option<SchemeEntry>> {
        let map = self.directory.ensure_loaded(self.provider)?;
        Ok(map.get(code.trim()).cloned())
    }

    pub fn list(&self) -> Result<Vec<SchemeEntry>> {
        let map = self.directory.ensure_loaded(self.provider)?;
        Ok(map.entries().to_vec())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.directory.ensure_loaded(self.provider)?.len())
    }
}
