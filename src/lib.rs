//! # dataportal
//!
//! Core of a read-only analytical dashboard over three business domains
//! (Sales, Procurement, Finance). Data access is entirely mocked: filters
//! are validated against fixed per-domain contracts, SQL is rendered for
//! transparency but never executed, and KPI numbers are fabricated by a
//! seeded variance model so identical runs reproduce identical results.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              RawFilters (user input)                     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [model::filter::validate]
//! ┌─────────────────────────────────────────────────────────┐
//! │              FilterValues (validated snapshot)           │
//! └─────────────────────────────────────────────────────────┘
//!                │                          │
//!                ▼ [render]                 ▼ [mock]
//! ┌──────────────────────────┐  ┌──────────────────────────┐
//! │  RenderedQuery (SQL text) │  │  RunResults (KPIs etc.)  │
//! └──────────────────────────┘  └──────────────────────────┘
//!                │                          │
//!                └────────────┬─────────────┘
//!                             ▼ [store::RunStore::submit]
//! ┌─────────────────────────────────────────────────────────┐
//! │            Run (immutable archived snapshot)             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`service::Portal`] facade wires the pipeline together and is the
//! seam where a real backend would later be substituted.

pub mod config;
pub mod error;
pub mod mock;
pub mod model;
pub mod render;
pub mod service;
pub mod sql;
pub mod store;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::error::{PortalError, PortalResult};
    pub use crate::mock::generate;
    pub use crate::model::{
        get_filter_spec, get_schema, validate, Domain, FilterSpec, FilterValues, KpiValue,
        RawFilters, RenderedQuery, Run, RunId, RunResults, Schema, ValidationError,
    };
    pub use crate::render::render;
    pub use crate::service::{Portal, RunOutcome, RunRequest};
    pub use crate::sql::Dialect;
    pub use crate::store::RunStore;
}

// Also export the headline types at the crate root for convenience
pub use config::Settings;
pub use error::{PortalError, PortalResult};
pub use model::{Domain, FilterValues, RawFilters, Run, RunId};
pub use service::{Portal, RunRequest};
pub use sql::Dialect;
