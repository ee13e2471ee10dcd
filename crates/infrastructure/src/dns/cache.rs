use hushdns_domain::RecordType;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::debug;

/// Cache key: one entry per (record type, hostname) pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub record_type: RecordType,
    pub hostname: String,
}

impl CacheKey {
    #[inline]
    pub fn new(hostname: &str, record_type: RecordType) -> Self {
        Self {
            record_type,
            hostname: hostname.to_string(),
        }
    }
}

struct CacheEntry {
    values: Arc<Vec<String>>,
    expires_at: Instant,
}

/// TTL-bounded, capacity-bounded answer cache.
///
/// Capacity pressure evicts least-recently-used entries; expiry is checked
/// on read. A capacity of zero disables the cache entirely.
pub struct DnsCache {
    entries: Option<Mutex<LruCache<CacheKey, CacheEntry>>>,
}

impl DnsCache {
    pub fn new(max_entries: usize) -> Self {
        let entries = NonZeroUsize::new(max_entries).map(|cap| Mutex::new(LruCache::new(cap)));
        Self { entries }
    }

    /// Returns the cached list, or `None` when absent or past expiry.
    /// Expired entries are dropped on read.
    pub fn get(&self, hostname: &str, record_type: RecordType) -> Option<Arc<Vec<String>>> {
        let entries = self.entries.as_ref()?;
        let key = CacheKey::new(hostname, record_type);
        let mut entries = entries.lock().unwrap();

        match entries.get(&key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(Arc::clone(&entry.values)),
            Some(_) => {
                entries.pop(&key);
                None
            }
            None => None,
        }
    }

    /// Store `values` for `ttl_secs`. A zero TTL, an empty list and a
    /// disabled cache all skip the write, so a key never maps to an empty
    /// or immediately-stale list.
    pub fn insert(
        &self,
        hostname: &str,
        record_type: RecordType,
        values: Arc<Vec<String>>,
        ttl_secs: u32,
    ) {
        if ttl_secs == 0 || values.is_empty() {
            return;
        }
        self.insert_for(
            hostname,
            record_type,
            values,
            Duration::from_secs(u64::from(ttl_secs)),
        );
    }

    fn insert_for(
        &self,
        hostname: &str,
        record_type: RecordType,
        values: Arc<Vec<String>>,
        ttl: Duration,
    ) {
        let Some(entries) = self.entries.as_ref() else {
            return;
        };

        let entry = CacheEntry {
            values,
            expires_at: Instant::now() + ttl,
        };
        entries
            .lock()
            .unwrap()
            .put(CacheKey::new(hostname, record_type), entry);

        debug!(hostname, record_type = %record_type, ttl_secs = ttl.as_secs(), "answer set cached");
    }

    /// Purge all entries immediately.
    pub fn clear(&self) {
        if let Some(entries) = self.entries.as_ref() {
            entries.lock().unwrap().clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| entries.lock().unwrap().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
