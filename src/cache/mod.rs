//! Bounded in-memory cache for raw API responses.
//!
//! Wikidata facts change slowly relative to process uptime, so entries
//! never expire by time; the cache is bounded by entry count with
//! least-recently-used eviction. The cache is explicitly constructed and
//! handed to the client that owns it, which keeps tests isolated (fresh
//! cache per test) and avoids hidden module-level state.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

/// Build the deterministic cache key for a request.
///
/// Parameters are serialized with keys sorted so that identical logical
/// requests collide regardless of the order the caller assembled them in.
pub fn cache_key(endpoint: &str, params: &[(&str, &str)]) -> String {
    let mut sorted: Vec<(&str, &str)> = params.to_vec();
    sorted.sort();

    let query: Vec<String> = sorted.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{}?{}", endpoint, query.join("&"))
}

/// Thread-safe bounded LRU cache mapping request keys to raw JSON bodies.
pub struct ResponseCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

struct CacheInner {
    entries: HashMap<String, Value>,
    // Front is oldest; touched keys move to the back.
    lru: VecDeque<String>,
}

impl ResponseCache {
    /// Create a cache holding at most `capacity` responses.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                lru: VecDeque::new(),
            }),
            capacity: capacity.max(1),
        }
    }

    /// Look up a cached response, marking the entry as recently used.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(value) = inner.entries.get(key).cloned() {
            inner.touch(key);
            debug!(key = %key, "Cache hit");
            Some(value)
        } else {
            None
        }
    }

    /// Insert a response, evicting the least-recently-used entry at capacity.
    pub fn insert(&self, key: String, value: Value) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        if inner.entries.insert(key.clone(), value).is_none() && inner.entries.len() > self.capacity
        {
            if let Some(oldest) = inner.lru.pop_front() {
                inner.entries.remove(&oldest);
                debug!(key = %oldest, "Evicted cache entry");
            }
        }
        inner.touch(&key);
    }

    /// Number of cached responses.
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheInner {
    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.lru.iter().position(|k| k == key) {
            self.lru.remove(pos);
        }
        self.lru.push_back(key.to_string());
    }
}
