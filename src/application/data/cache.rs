use super::table::ListingTable;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

/// Identifies one version of a dataset as seen by the loader
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub path: PathBuf,
    pub modified: SystemTime,
    pub reference_year: i32,
}

struct CacheEntry {
    key: CacheKey,
    table: Arc<ListingTable>,
}

/// Session-scoped cache of loaded tables, one entry per source path.
///
/// A newer modification time (or a different reference year) for the same
/// path replaces the old entry. Tables are immutable once cached.
#[derive(Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<PathBuf, CacheEntry>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<ListingTable>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&key.path)
            .filter(|entry| entry.key == *key)
            .map(|entry| Arc::clone(&entry.table))
    }

    pub fn insert(&self, key: CacheKey, table: Arc<ListingTable>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.path.clone(), CacheEntry { key, table });
    }

    pub fn invalidate(&self, path: &Path) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::table::DatasetVersion;
    use std::time::Duration;

    fn key(modified: SystemTime) -> CacheKey {
        CacheKey {
            path: PathBuf::from("Alpha_Motors.csv"),
            modified,
            reference_year: 2024,
        }
    }

    fn table(modified: SystemTime) -> Arc<ListingTable> {
        Arc::new(ListingTable::new(
            Vec::new(),
            DatasetVersion {
                path: PathBuf::from("Alpha_Motors.csv"),
                modified,
            },
            2024,
        ))
    }

    #[test]
    fn test_hit_requires_matching_mtime() {
        let cache = DatasetCache::new();
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let t1 = t0 + Duration::from_secs(60);

        cache.insert(key(t0), table(t0));

        assert!(cache.get(&key(t0)).is_some());
        assert!(cache.get(&key(t1)).is_none());
    }

    #[test]
    fn test_newer_version_replaces_entry() {
        let cache = DatasetCache::new();
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let t1 = t0 + Duration::from_secs(60);

        cache.insert(key(t0), table(t0));
        cache.insert(key(t1), table(t1));

        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key(t0)).is_none());
        assert!(cache.get(&key(t1)).is_some());

        assert!(cache.invalidate(Path::new("Alpha_Motors.csv")));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reference_year_is_part_of_key() {
        let cache = DatasetCache::new();
        let t0 = SystemTime::UNIX_EPOCH;
        cache.insert(key(t0), table(t0));

        let mut other = key(t0);
        other.reference_year = 2025;
        assert!(cache.get(&other).is_none());
    }
}
