//! Bounded, time-boxed memoization of provider calls.
//!
//! [`CachedProvider`] wraps any [`FundamentalsProvider`] and remembers each
//! successful answer under the exact call inputs. Entries expire after a TTL
//! and the store never holds more than `capacity` entries: inserting purges
//! expired entries first, then evicts the oldest insertion if still full.
//! Errors are returned as-is and never stored.

use async_trait::async_trait;
use cuenta_traits::{CompanyInfo, FinancialStatements, FundamentalsProvider, PriceHistory, Result};
use std::{
    collections::HashMap,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Statements(String),
    Prices(String, u32),
    Info(String),
    Exists(String),
}

#[derive(Debug, Clone)]
enum CachedValue {
    Statements(FinancialStatements),
    Prices(PriceHistory),
    Info(CompanyInfo),
    Exists(bool),
}

#[derive(Debug)]
struct CacheEntry {
    value: CachedValue,
    seq: u64,
    expires_at: Instant,
}

#[derive(Debug, Default)]
struct Store {
    entries: HashMap<CacheKey, CacheEntry>,
    next_seq: u64,
}

/// A [`FundamentalsProvider`] that caches the answers of another one.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    ttl: Duration,
    capacity: usize,
    store: RwLock<Store>,
}

impl<P> CachedProvider<P> {
    /// Wrap `inner`, keeping at most `capacity` entries for `ttl` each.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(inner: P, ttl: Duration, capacity: usize) -> Self {
        Self {
            inner,
            ttl,
            capacity: capacity.max(1),
            store: RwLock::new(Store::default()),
        }
    }

    /// The wrapped provider.
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of stored entries, fresh or not.
    pub async fn len(&self) -> usize {
        self.store.read().await.entries.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.entries.is_empty()
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        self.store.write().await.entries.clear();
    }

    async fn lookup(&self, key: &CacheKey) -> Option<CachedValue> {
        let guard = self.store.read().await;
        match guard.entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => {
                trace!(?key, "cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                trace!(?key, "cache entry expired");
                None
            }
            None => {
                trace!(?key, "cache miss");
                None
            }
        }
    }

    async fn insert(&self, key: CacheKey, value: CachedValue) {
        let now = Instant::now();
        let mut guard = self.store.write().await;
        let store = &mut *guard;

        let before = store.entries.len();
        store.entries.retain(|_, entry| now < entry.expires_at);
        if store.entries.len() < before {
            debug!(purged = before - store.entries.len(), "purged expired cache entries");
        }

        if !store.entries.contains_key(&key) && store.entries.len() >= self.capacity {
            let oldest = store
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                debug!(key = ?oldest, "evicting oldest cache entry");
                store.entries.remove(&oldest);
            }
        }

        let seq = store.next_seq;
        store.next_seq += 1;
        store.entries.insert(
            key,
            CacheEntry {
                value,
                seq,
                expires_at: now + self.ttl,
            },
        );
    }
}

#[async_trait]
impl<P: FundamentalsProvider> FundamentalsProvider for CachedProvider<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn statements(&self, symbol: &str) -> Result<FinancialStatements> {
        let key = CacheKey::Statements(symbol.to_string());
        if let Some(CachedValue::Statements(hit)) = self.lookup(&key).await {
            return Ok(hit);
        }
        let fresh = self.inner.statements(symbol).await?;
        self.insert(key, CachedValue::Statements(fresh.clone())).await;
        Ok(fresh)
    }

    async fn price_history(&self, symbol: &str, days: u32) -> Result<PriceHistory> {
        let key = CacheKey::Prices(symbol.to_string(), days);
        if let Some(CachedValue::Prices(hit)) = self.lookup(&key).await {
            return Ok(hit);
        }
        let fresh = self.inner.price_history(symbol, days).await?;
        self.insert(key, CachedValue::Prices(fresh.clone())).await;
        Ok(fresh)
    }

    async fn company_info(&self, symbol: &str) -> Result<CompanyInfo> {
        let key = CacheKey::Info(symbol.to_string());
        if let Some(CachedValue::Info(hit)) = self.lookup(&key).await {
            return Ok(hit);
        }
        let fresh = self.inner.company_info(symbol).await?;
        self.insert(key, CachedValue::Info(fresh.clone())).await;
        Ok(fresh)
    }

    async fn ticker_exists(&self, symbol: &str) -> Result<bool> {
        let key = CacheKey::Exists(symbol.to_string());
        if let Some(CachedValue::Exists(hit)) = self.lookup(&key).await {
            return Ok(hit);
        }
        let fresh = self.inner.ticker_exists(symbol).await?;
        self.insert(key, CachedValue::Exists(fresh)).await;
        Ok(fresh)
    }
}
