//! TTL-bounded share entry store
//!
//! Capacity-bounded map with an explicit expiry instant per entry. Expiry
//! is checked lazily on every access and additionally swept by a periodic
//! background task, so expired entries are never served even between
//! sweeps. The trait seam lets the eviction strategy vary without touching
//! callers.
//!
//! # Thread Safety
//!
//! All access goes through `tokio::sync::RwLock`; the store is safe for
//! concurrent use from any number of in-flight requests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, Instant};

/// Abstract interface over the share entry store.
#[async_trait]
pub trait ShareStore: Send + Sync {
    /// Insert or overwrite the value under `key`.
    async fn add(&self, key: String, value: Vec<u8>);

    /// Look up a live entry; misses and expired entries return `None`.
    async fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Whether a live entry exists under `key`.
    async fn exists(&self, key: &str) -> bool;

    /// Snapshot of all live entries, for diagnostics.
    async fn peek_all(&self) -> Vec<(String, Vec<u8>)>;

    /// Drop every entry.
    async fn purge(&self);

    /// Drop entries past their expiry instant.
    async fn purge_expired(&self);

    /// Release background resources. Idempotent.
    async fn close(&self);
}

struct StoredEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl StoredEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Default `ShareStore`: capacity-bounded map with per-entry TTL and a
/// periodic sweep task.
pub struct TtlShareStore {
    entries: Arc<tokio::sync::RwLock<HashMap<String, StoredEntry>>>,
    capacity: usize,
    ttl: Duration,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl TtlShareStore {
    pub fn new(capacity: usize, ttl: Duration, sweep_interval: Duration) -> Self {
        let entries: Arc<tokio::sync::RwLock<HashMap<String, StoredEntry>>> =
            Arc::new(tokio::sync::RwLock::new(HashMap::new()));

        let sweep_entries = Arc::clone(&entries);
        let sweeper = tokio::spawn(async move {
            let mut ticker = interval(sweep_interval);
            // The first tick completes immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let now = Instant::now();
                let mut map = sweep_entries.write().await;
                let before = map.len();
                map.retain(|_, entry| entry.is_live(now));
                let swept = before - map.len();
                if swept > 0 {
                    tracing::debug!(swept, remaining = map.len(), "swept expired share entries");
                }
            }
        });

        Self {
            entries,
            capacity,
            ttl,
            sweeper: Mutex::new(Some(sweeper)),
        }
    }

    fn take_sweeper(&self) -> Option<JoinHandle<()>> {
        self.sweeper.lock().ok().and_then(|mut guard| guard.take())
    }
}

#[async_trait]
impl ShareStore for TtlShareStore {
    async fn add(&self, key: String, value: Vec<u8>) {
        let now = Instant::now();
        let mut map = self.entries.write().await;

        // Expired entries must not count against capacity.
        map.retain(|_, entry| entry.is_live(now));

        if !map.contains_key(&key) && map.len() >= self.capacity {
            // Evict the entry closest to expiry, i.e. the oldest insert.
            let evict = map
                .iter()
                .min_by_key(|(_, entry)| entry.expires_at)
                .map(|(k, _)| k.clone());
            if let Some(evict) = evict {
                tracing::debug!(key = %evict, "share cache full, evicting oldest entry");
                map.remove(&evict);
            }
        }

        map.insert(
            key,
            StoredEntry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let now = Instant::now();
        let map = self.entries.read().await;
        map.get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    async fn exists(&self, key: &str) -> bool {
        let now = Instant::now();
        let map = self.entries.read().await;
        map.get(key).is_some_and(|entry| entry.is_live(now))
    }

    async fn peek_all(&self) -> Vec<(String, Vec<u8>)> {
        let now = Instant::now();
        let map = self.entries.read().await;
        map.iter()
            .filter(|(_, entry)| entry.is_live(now))
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    async fn purge(&self) {
        self.entries.write().await.clear();
    }

    async fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.write().await.retain(|_, entry| entry.is_live(now));
    }

    async fn close(&self) {
        if let Some(handle) = self.take_sweeper() {
            handle.abort();
        }
    }
}

impl Drop for TtlShareStore {
    fn drop(&mut self) {
        if let Some(handle) = self.take_sweeper() {
            handle.abort();
        }
    }
}
