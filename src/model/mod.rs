//! Domain model: domains, gold-table schemas, filter contracts, runs.

pub mod domain;
pub mod filter;
pub mod run;
pub mod schema;

pub use domain::Domain;
pub use filter::{
    get_filter_spec, validate, FilterField, FilterKind, FilterSpec, FilterValues, RangeBound,
    RawFilters, ValidationError,
};
pub use run::{
    Breakdown, BreakdownRow, KpiResult, KpiValue, RenderedQuery, Run, RunId, RunResults,
    TrendLine, TrendSeries,
};
pub use schema::{get_schema, Column, Schema, GOLD_SCHEMA};
