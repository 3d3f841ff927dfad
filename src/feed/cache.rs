// Time-boxed read cache for the parsed sheet.
//
// The table is refetched once it is older than the TTL. A failed refresh keeps
// serving the previous table for another window.
use crate::domain::Table;
use crate::feed::{parse_table, FeedError, FeedSource};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

struct Cached {
    table: Arc<Table>,
    loaded_at: Instant,
}

pub struct FeedCache {
    source: Box<dyn FeedSource>,
    ttl: Duration,
    slot: Mutex<Option<Cached>>,
}

impl FeedCache {
    pub fn new(source: Box<dyn FeedSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached table, reloading it first when it has expired.
    /// The lock is held across the reload.
    pub fn table(&self) -> Result<Arc<Table>, FeedError> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(cached) = slot.as_ref() {
            if cached.loaded_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&cached.table));
            }
        }

        match self.load() {
            Ok(table) => {
                let table = Arc::new(table);
                *slot = Some(Cached {
                    table: Arc::clone(&table),
                    loaded_at: Instant::now(),
                });
                Ok(table)
            }
            Err(e) => match slot.as_mut() {
                Some(stale) => {
                    log::error!("Feed refresh failed, serving stale table: {e}");
                    stale.loaded_at = Instant::now();
                    Ok(Arc::clone(&stale.table))
                }
                None => Err(e),
            },
        }
    }

    fn load(&self) -> Result<Table, FeedError> {
        let start = Instant::now();
        let text = self.source.fetch()?;
        let table = parse_table(&text)?;
        log::info!(
            "Loaded {} facility records in {:?}",
            table.keys().len(),
            start.elapsed()
        );
        Ok(table)
    }
}
