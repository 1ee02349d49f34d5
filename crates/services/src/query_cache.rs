use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
}

/// Time-bounded cache of query results keyed by query key.
///
/// Callers pass `now` explicitly so freshness follows the owning service's
/// `Clock`. The lock is only held for map access, never across an await.
#[derive(Debug)]
pub struct QueryCache<V> {
    lifetime: Duration,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> QueryCache<V> {
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Map access; a poisoned lock is logged and recovered.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        self.entries.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("query cache lock poisoned; recovering entries");
            poisoned.into_inner()
        })
    }

    /// The cached value for `key` if it was stored less than `lifetime` ago.
    #[must_use]
    pub fn get_fresh(&self, key: &str, now: DateTime<Utc>) -> Option<V> {
        let entries = self.entries();
        let entry = entries.get(key)?;
        (now - entry.fetched_at < self.lifetime).then(|| entry.value.clone())
    }

    pub fn insert(&self, key: impl Into<String>, value: V, now: DateTime<Utc>) {
        self.entries().insert(
            key.into(),
            Entry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Drop every entry whose key satisfies `predicate`.
    pub fn invalidate_where(&self, predicate: impl Fn(&str) -> bool) {
        self.entries().retain(|key, _| !predicate(key));
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
