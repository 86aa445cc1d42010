//! Service facade - the mock API boundary.
//!
//! A request carries `{domain, raw filters}`; a response carries the
//! rendered query and generated results. This is the seam where a real
//! backend would later be substituted: nothing here assumes a transport,
//! and the store is owned explicitly rather than living in ambient state.

use std::sync::Arc;

use crate::config::Settings;
use crate::error::PortalResult;
use crate::mock::generate;
use crate::model::{
    validate, Domain, FilterSpec, FilterValues, RawFilters, RenderedQuery, Run, RunId,
    RunResults, Schema,
};
use crate::render::render;
use crate::store::RunStore;

/// One analytical run request, as collected from a UI.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub domain: Domain,
    pub filters: RawFilters,
}

impl RunRequest {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            filters: RawFilters::new(),
        }
    }

    pub fn with_filters(domain: Domain, filters: RawFilters) -> Self {
        Self { domain, filters }
    }
}

/// What a run produces before it is archived.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub filters: FilterValues,
    pub query: RenderedQuery,
    pub results: RunResults,
}

/// The portal core: validates, renders, generates, archives.
///
/// Constructed at process start and torn down at process end; the run store
/// lives exactly as long as the portal.
#[derive(Debug, Default)]
pub struct Portal {
    settings: Settings,
    store: RunStore,
}

impl Portal {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            store: RunStore::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validate and compute a run without archiving it.
    pub fn preview(&self, request: &RunRequest) -> PortalResult<RunOutcome> {
        let filters = validate(request.domain, &request.filters)?;
        let query = render(&filters, self.settings.dialect);
        let results = generate(&filters);
        Ok(RunOutcome {
            filters,
            query,
            results,
        })
    }

    /// Execute a run: validate, render, generate, and archive the snapshot.
    pub fn execute(&self, request: &RunRequest) -> PortalResult<Arc<Run>> {
        let outcome = self.preview(request)?;
        Ok(self.store.submit(
            request.domain,
            outcome.filters,
            outcome.query,
            outcome.results,
        ))
    }

    /// Reopen an archived run. Stored results are canonical; nothing is
    /// regenerated.
    pub fn run(&self, id: RunId) -> PortalResult<Arc<Run>> {
        self.store.get(id)
    }

    /// Archived runs, newest first, optionally restricted to one domain.
    pub fn archive(&self, domain: Option<Domain>) -> Vec<Arc<Run>> {
        self.store.list(domain)
    }

    pub fn run_count(&self, domain: Option<Domain>) -> usize {
        self.store.list(domain).len()
    }

    /// The filter contract for a domain.
    pub fn filter_spec(&self, domain: Domain) -> &'static FilterSpec {
        FilterSpec::of(domain)
    }

    /// The gold-table definition for a domain (transparency payload).
    pub fn schema(&self, domain: Domain) -> &'static Schema {
        Schema::of(domain)
    }
}
