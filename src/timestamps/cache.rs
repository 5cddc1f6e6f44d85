use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Timestamp, TimestampError};

/// Memoizes `Timestamp::parse` by input text.
///
/// Owned by whoever parses many timestamps (plan building, duration
/// conversion) and passed by reference. A disabled cache parses every time
/// and returns exactly the same results.
#[derive(Debug)]
pub struct TimestampCache {
    entries: Mutex<HashMap<String, Timestamp>>,
    stats: Mutex<CacheStats>,
    enabled: bool,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            (self.hits as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl TimestampCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            stats: Mutex::new(CacheStats::default()),
            enabled: true,
        }
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Parses `text`, reusing an earlier result for the same input.
    ///
    /// Failed parses are never stored.
    pub fn parse(&self, text: &str) -> Result<Timestamp, TimestampError> {
        if !self.enabled {
            return Timestamp::parse(text);
        }

        if let Some(ts) = lock(&self.entries).get(text).copied() {
            lock(&self.stats).hits += 1;
            return Ok(ts);
        }

        let ts = Timestamp::parse(text)?;
        // Two callers racing on the same key insert the same value.
        lock(&self.entries).entry(text.to_string()).or_insert(ts);
        lock(&self.stats).misses += 1;
        Ok(ts)
    }

    pub fn stats(&self) -> CacheStats {
        let size = lock(&self.entries).len();
        CacheStats {
            size,
            ..*lock(&self.stats)
        }
    }

    pub fn clear(&self) {
        lock(&self.entries).clear();
        *lock(&self.stats) = CacheStats::default();
        log::debug!("Timestamp cache cleared");
    }
}

impl Default for TimestampCache {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
