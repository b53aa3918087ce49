use crate::config::Config;
use crate::error::LoadError;
use crate::pipeline::load;
use crate::types::activity::ActivityTable;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    cache: ActivityCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            cache: ActivityCache::new(config.cache_ttl),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &ActivityCache {
        &self.cache
    }

    /// The configured source table, served from cache while fresh.
    pub fn activities(&self) -> Result<Arc<ActivityTable>, LoadError> {
        self.cache.get_or_load(&self.config.data_path)
    }
}

/// Loaded activity tables keyed by source path.
///
/// An entry is fresh for `ttl` after it was loaded; a read past that reloads
/// the file. Tables are immutable once loaded and shared through `Arc`, so two
/// reads within the interval return the same table. Failed loads are never
/// stored.
#[derive(Clone)]
pub struct ActivityCache {
    entries: Arc<DashMap<PathBuf, CachedTable>>,
    ttl: Duration,
}

struct CachedTable {
    table: Arc<ActivityTable>,
    loaded_at: Instant,
}

impl ActivityCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<ActivityTable>, LoadError> {
        let fresh = self
            .entries
            .get(path)
            .filter(|cached| cached.loaded_at.elapsed() < self.ttl)
            .map(|cached| Arc::clone(&cached.table));
        if let Some(table) = fresh {
            tracing::debug!("Cache hit for {}", path.display());
            return Ok(table);
        }

        tracing::debug!("Cache miss for {}, loading", path.display());
        let table = Arc::new(load::load_path(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CachedTable {
                table: Arc::clone(&table),
                loaded_at: Instant::now(),
            },
        );
        Ok(table)
    }

    /// Returns true if an entry was dropped.
    pub fn invalidate(&self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn invalidate_all(&self) {
        self.entries.clear();
        tracing::info!("Activity cache cleared");
    }

    pub fn evict_expired(&self) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, cached| cached.loaded_at.elapsed() < ttl);
        tracing::info!("Cache eviction complete. Current size: {}", self.entries.len());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
