//! Run store: the session archive.
//!
//! An append-only, in-memory log of executed runs. The store exclusively
//! owns all run records; id assignment and append happen under one mutex so
//! run ids stay monotonic even if the store is shared behind a service.
//! Nothing survives the process - durable storage belongs to an external
//! collaborator.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::{PortalError, PortalResult};
use crate::model::{Domain, FilterValues, RenderedQuery, Run, RunId, RunResults};

/// Append-only collection of executed runs.
#[derive(Debug, Default)]
pub struct RunStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    runs: Vec<Arc<Run>>,
    next_id: u64,
}

impl RunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new run: assigns the next run id and the current timestamp,
    /// appends, and returns the stored record. Atomic as a whole.
    pub fn submit(
        &self,
        domain: Domain,
        filters: FilterValues,
        query: RenderedQuery,
        results: RunResults,
    ) -> Arc<Run> {
        let mut inner = self.inner.lock().expect("run store mutex poisoned");
        inner.next_id += 1;
        let run = Arc::new(Run {
            id: RunId(inner.next_id),
            domain,
            filters,
            query,
            results,
            created_at: Utc::now(),
        });
        inner.runs.push(Arc::clone(&run));
        run
    }

    /// Reopen a stored run. Returns the identical snapshot that `submit`
    /// returned; results are never regenerated.
    pub fn get(&self, id: RunId) -> PortalResult<Arc<Run>> {
        let inner = self.inner.lock().expect("run store mutex poisoned");
        inner
            .runs
            .iter()
            .find(|run| run.id == id)
            .cloned()
            .ok_or(PortalError::RunNotFound(id))
    }

    /// List stored runs, newest first, optionally restricted to a domain.
    pub fn list(&self, domain: Option<Domain>) -> Vec<Arc<Run>> {
        let inner = self.inner.lock().expect("run store mutex poisoned");
        inner
            .runs
            .iter()
            .rev()
            .filter(|run| domain.map_or(true, |d| run.domain == d))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("run store mutex poisoned").runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
