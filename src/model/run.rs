//! Runs: one executed, filtered query-and-result snapshot.
//!
//! A run is created when the user triggers execution and is immutable from
//! then on. Stored results are canonical - reopening an archived run never
//! regenerates them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Domain, FilterValues};

/// The SQL a real backend would execute for a run.
///
/// Generated for transparency only - it is never executed here. Derived from
/// the filter snapshot, always embedded in a [`Run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedQuery {
    pub domain: Domain,
    /// Bare WHERE-clause text (without the `WHERE` keyword).
    pub where_sql: String,
    /// Full illustrative aggregate SELECT.
    pub select_sql: String,
}

/// Unique, monotonically increasing run identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

impl FromStr for RunId {
    type Err = std::num::ParseIntError;

    /// Accepts both `run-42` and `42`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("run-").unwrap_or(s);
        digits.parse().map(RunId)
    }
}

/// A single KPI value, typed by how it formats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum KpiValue {
    /// Non-negative integer count.
    Count(u64),
    /// Monetary amount, two decimals.
    Amount(f64),
    /// Percentage in [0, 100], one decimal.
    Percent(f64),
    /// Metric has no defined value for the synthesized volume
    /// (e.g. operating margin when income is zero).
    Undefined,
}

impl KpiValue {
    pub fn as_count(&self) -> Option<u64> {
        match self {
            KpiValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            KpiValue::Count(n) => Some(*n as f64),
            KpiValue::Amount(v) | KpiValue::Percent(v) => Some(*v),
            KpiValue::Undefined => None,
        }
    }
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiValue::Count(n) => f.write_str(&group_digits(*n)),
            KpiValue::Amount(v) => {
                let negative = *v < 0.0;
                let cents = (v.abs() * 100.0).round() as u64;
                let (whole, frac) = (cents / 100, cents % 100);
                if negative {
                    write!(f, "-{}.{:02}", group_digits(whole), frac)
                } else {
                    write!(f, "{}.{:02}", group_digits(whole), frac)
                }
            }
            KpiValue::Percent(v) => write!(f, "{:.1}%", v),
            KpiValue::Undefined => f.write_str("n/a"),
        }
    }
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// KPI values keyed by metric name, in display order.
pub type KpiResult = IndexMap<String, KpiValue>;

/// One named line of a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub name: String,
    pub values: Vec<f64>,
}

/// Monthly trend data: one value per month label, per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub months: Vec<String>,
    pub lines: Vec<TrendLine>,
}

/// One breakdown bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub value: f64,
}

/// Top-N breakdown of the headline amount along one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub dimension: String,
    pub rows: Vec<BreakdownRow>,
}

/// Everything a run produces: KPI cards, trend chart, breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResults {
    pub kpis: KpiResult,
    pub trends: TrendSeries,
    pub breakdown: Breakdown,
}

/// A single analytical run: domain, filter snapshot, rendered SQL, results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: RunId,
    pub domain: Domain,
    pub filters: FilterValues,
    pub query: RenderedQuery,
    pub results: RunResults,
    pub created_at: DateTime<Utc>,
}

impl Run {
    /// Human-readable name, e.g. `Sales - 2024-01-01 to 2024-01-31 | region: DACH`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.domain.title(), self.filters.summary())
    }
}
