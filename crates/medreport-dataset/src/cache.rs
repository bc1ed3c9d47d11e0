//! Load-once cache for the combined dataset.
//!
//! `DatasetCache` owns a `SourceReader` and the ordered source list. The
//! first call to `get_or_load()` loads and combines every source; later calls
//! return the same `Arc<Dataset>`. Concurrent first callers race for the
//! write lock and only the winner loads; the others find the value already
//! present when they re-check under the lock.
//!
//! `invalidate()` drops the cached value so the next access reloads, which
//! is how tests and source-change handlers force a refresh.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, PoisonError, RwLock,
};

use tracing::{debug, info};

use medreport_contracts::dataset::{Dataset, SourceId};
use medreport_core::traits::{DatasetSource, SourceReader};

use crate::loader::{load_sources, LoadSummary};

#[derive(Clone)]
struct Loaded {
    dataset: Arc<Dataset>,
    summary: Arc<LoadSummary>,
}

/// An explicitly owned, lazily loaded, shareable dataset.
pub struct DatasetCache {
    reader: Box<dyn SourceReader>,
    sources: Vec<SourceId>,
    state: RwLock<Option<Loaded>>,
    loads: AtomicUsize,
}

impl DatasetCache {
    /// Create a cache over `sources`. Nothing is read until first access.
    pub fn new(reader: Box<dyn SourceReader>, sources: Vec<SourceId>) -> Self {
        Self {
            reader,
            sources,
            state: RwLock::new(None),
            loads: AtomicUsize::new(0),
        }
    }

    /// The combined dataset, loading it on first call.
    pub fn get_or_load(&self) -> Arc<Dataset> {
        Arc::clone(&self.loaded().dataset)
    }

    /// Per-source results of the current load, loading first if needed.
    pub fn summary(&self) -> Arc<LoadSummary> {
        Arc::clone(&self.loaded().summary)
    }

    /// Drop the cached dataset; the next access reloads every source.
    pub fn invalidate(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.take().is_some() {
            debug!("dataset cache invalidated");
        }
    }

    /// Invalidate and immediately reload.
    pub fn refresh(&self) -> Arc<Dataset> {
        self.invalidate();
        self.get_or_load()
    }

    /// True once a load has completed and not been invalidated since.
    pub fn is_loaded(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// How many times the sources have been loaded over this cache's life.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn sources(&self) -> &[SourceId] {
        &self.sources
    }

    fn loaded(&self) -> Loaded {
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(loaded) = state.as_ref() {
                return loaded.clone();
            }
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded while we waited for the write lock.
        if let Some(loaded) = state.as_ref() {
            return loaded.clone();
        }

        let (dataset, summary) = load_sources(self.reader.as_ref(), &self.sources);
        let generation = self.loads.fetch_add(1, Ordering::SeqCst) + 1;
        info!(generation, rows = dataset.len(), "dataset cache populated");

        let loaded = Loaded {
            dataset: Arc::new(dataset),
            summary: Arc::new(summary),
        };
        *state = Some(loaded.clone());
        loaded
    }
}

impl DatasetSource for DatasetCache {
    fn dataset(&self) -> Arc<Dataset> {
        self.get_or_load()
    }
}
