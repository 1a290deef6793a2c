//! Read-through cache with time-based expiry and explicit invalidation.
//!
//! Replaces hidden process-wide "latest record" caches: the cache is an
//! object injected into the read path, and writers call [`TtlCache::invalidate`]
//! synchronously after every write.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// How long the site keeps the active hero/about record before re-reading it.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    valid_until: Instant,
}

pub struct TtlCache<K, V, C = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash,
    V: Clone,
    C: Clock,
{
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value and the instant it stops being valid.
    ///
    /// An expired entry is dropped and reported as a miss.
    pub fn get(&self, key: &K) -> Option<(V, Instant)> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if now < entry.valid_until => {
                Some((entry.value.clone(), entry.valid_until))
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores a value and returns its expiry instant.
    pub fn insert(&self, key: K, value: V) -> Instant {
        let valid_until = self.clock.now() + self.ttl;
        self.entries.lock().insert(key, Entry { value, valid_until });
        valid_until
    }

    /// Returns the cached value or loads, caches and returns a fresh one.
    ///
    /// Loader errors are returned and not cached. The lock is not held while
    /// the loader runs.
    pub fn get_or_load<E>(&self, key: K, load: impl FnOnce(&K) -> Result<V, E>) -> Result<V, E> {
        if let Some((value, _)) = self.get(&key) {
            return Ok(value);
        }
        let value = load(&key)?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Drops the entry for `key`. Returns whether one was present.
    pub fn invalidate(&self, key: &K) -> bool {
        self.entries.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
