//! Lazily loaded scheme code to name directory.
//!
//! The full listing is fetched from the provider on first access and kept
//! for the lifetime of the owning SDK. Loading happens under a mutex, so
//! concurrent first calls fetch once and all receive the same mapping. A
//! failed load leaves the directory empty and the next call retries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::models::SchemeEntry;
use crate::provider::NavProvider;

// ---------------------------------------------------------------------------
// SchemeMap
// ---------------------------------------------------------------------------

/// Immutable code to name mapping in provider order.
#[derive(Debug, Default)]
pub struct SchemeMap {
    entries: Vec<SchemeEntry>,
    index: HashMap<String, usize>,
}

impl SchemeMap {
    /// Build a mapping, keeping one entry per code.
    ///
    /// A repeated code overwrites the name but keeps the position of its
    /// first occurrence.
    pub fn from_entries(raw: Vec<SchemeEntry>) -> Self {
        let mut entries: Vec<SchemeEntry> = Vec::with_capacity(raw.len());
        let mut index = HashMap::with_capacity(raw.len());
        for entry in raw {
            match index.get(&entry.code) {
                Some(&pos) => entries[pos] = entry,
                None => {
                    index.insert(entry.code.clone(), entries.len());
                    entries.push(entry);
                }
            }
        }
        Self { entries, index }
    }

    pub fn get(&self, code: &str) -> Option<&SchemeEntry> {
        self.index.get(code).map(|&pos| &self.entries[pos])
    }

    pub fn entries(&self) -> &[SchemeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose name contains `keyword`, ignoring case.
    ///
    /// An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Vec<SchemeEntry> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// SchemeDirectory
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SchemeDirectory {
    slot: Mutex<Option<Arc<SchemeMap>>>,
}

impl SchemeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    // The slot is only ever replaced whole, so a poisoned guard still holds
    // a consistent value.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<SchemeMap>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached mapping, fetching it from `provider` if empty.
    pub fn ensure_loaded(&self, provider: &dyn NavProvider) -> Result<Arc<SchemeMap>> {
        let mut slot = self.lock();
        if let Some(map) = slot.as_ref() {
            return Ok(Arc::clone(map));
        }

        let entries = provider.scheme_codes()?;
        let map = Arc::new(SchemeMap::from_entries(entries));
        tracing::info!(schemes = map.len(), "scheme directory loaded");
        *slot = Some(Arc::clone(&map));
        Ok(map)
    }

    /// Fetch a fresh mapping and swap it in.
    ///
    /// The previous mapping stays in place if the fetch fails.
    pub fn reload(&self, provider: &dyn NavProvider) -> Result<Arc<SchemeMap>> {
        let mut slot = self.lock();
        let entries = provider.scheme_codes()?;
        let map = Arc::new(SchemeMap::from_entries(entries));
        tracing::info!(schemes = map.len(), "scheme directory reloaded");
        *slot = Some(Arc::clone(&map));
        Ok(map)
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    /// Drop the cached mapping. The next access refetches.
    pub fn invalidate(&self) {
        self.lock().take();
    }
}
