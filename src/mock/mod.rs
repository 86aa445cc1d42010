//! Mock result generator.
//!
//! Fabricates plausible KPI numbers, trend series, and breakdown rows from a
//! filter snapshot. No data is read - volumes are a base figure per domain
//! scaled by how selective the filters are, with variance seeded from a
//! content hash of the inputs ([`seed::seed_for`]), so identical runs
//! reproduce identical numbers.
//!
//! Invariants the model maintains:
//! - counts are non-negative integers and never increase when filters narrow;
//! - percentage metrics stay within [0, 100];
//! - derived metrics agree with their components (avg = total / count);
//! - a zero synthesized income leaves the margin undefined rather than
//!   dividing by zero.

pub mod seed;

pub use seed::seed_for;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    Breakdown, BreakdownRow, Domain, FilterSpec, FilterValues, KpiResult, KpiValue, RangeBound,
    RunResults, TrendLine, TrendSeries,
};

/// Each populated filter field scales volume by at most this factor, which
/// keeps any filtered run below the jitter floor of an unfiltered run.
const MAX_FIELD_SELECTIVITY: f64 = 0.9;

/// Volume jitter range; the lower bound matches `MAX_FIELD_SELECTIVITY`.
const JITTER_RANGE: std::ops::RangeInclusive<f64> = 0.9..=1.0;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Longest trend series rendered for a wide range.
const MAX_TREND_POINTS: i32 = 24;

/// Most breakdown rows rendered.
const MAX_BREAKDOWN_ROWS: usize = 10;

/// Generate KPI cards, trend series, and breakdown rows for a filter
/// snapshot. Pure: identical inputs give identical outputs.
pub fn generate(filters: &FilterValues) -> RunResults {
    let mut rng = StdRng::seed_from_u64(seed_for(filters));

    let jitter = rng.random_range(JITTER_RANGE);
    let volume = (base_volume(filters.domain) * selectivity(filters) * jitter).floor() as u64;

    match filters.domain {
        Domain::Sales => sales_results(filters, volume, &mut rng),
        Domain::Procurement => procurement_results(filters, volume, &mut rng),
        Domain::Finance => finance_results(filters, volume, &mut rng),
    }
}

/// Unfiltered row volume per gold table.
fn base_volume(domain: Domain) -> f64 {
    match domain {
        Domain::Sales => 50_000.0,
        Domain::Procurement => 25_000.0,
        Domain::Finance => 40_000.0,
    }
}

/// Combined selectivity of the populated filter fields, in (0, 1].
///
/// Empty filters give 1.0; every populated field multiplies in a factor of
/// at most [`MAX_FIELD_SELECTIVITY`].
fn selectivity(filters: &FilterValues) -> f64 {
    let spec = FilterSpec::of(filters.domain);
    let mut sel = 1.0;

    match &filters.range {
        Some(RangeBound::Dates { from, to }) => match (from, to) {
            (Some(from), Some(to)) => {
                let days = to.signed_duration_since(*from).num_days() + 1;
                sel *= (days as f64 / 366.0).clamp(1.0 / 366.0, MAX_FIELD_SELECTIVITY);
            }
            (None, None) => {}
            // Open-ended bound: half the data.
            _ => sel *= 0.5,
        },
        Some(RangeBound::Periods { from, to }) => match (from, to) {
            (Some(from), Some(to)) => {
                let months = month_span(from, to);
                sel *= (months as f64 / 12.0).clamp(1.0 / 12.0, MAX_FIELD_SELECTIVITY);
            }
            (None, None) => {}
            _ => sel *= 0.5,
        },
        None => {}
    }

    for field in spec.multi_selects() {
        if let Some(values) = filters.selection(field.name) {
            sel *= MAX_FIELD_SELECTIVITY * values.len() as f64 / field.allowed.len() as f64;
        }
    }

    sel
}

// =============================================================================
// Per-domain results
// =============================================================================

fn sales_results(filters: &FilterValues, orders: u64, rng: &mut StdRng) -> RunResults {
    let order_value = rng.random_range(80.0..=320.0);
    let revenue = round2(order_value * orders as f64);
    let avg_order_value = if orders > 0 {
        revenue / orders as f64
    } else {
        0.0
    };
    let visitors = orders + (orders as f64 * rng.random_range(0.8..=2.2)).floor() as u64;
    let conversion = if visitors > 0 {
        orders as f64 / visitors as f64 * 100.0
    } else {
        0.0
    };

    let mut kpis = KpiResult::new();
    kpis.insert("total_revenue".into(), KpiValue::Amount(revenue));
    kpis.insert("total_orders".into(), KpiValue::Count(orders));
    kpis.insert("avg_order_value".into(), KpiValue::Amount(avg_order_value));
    kpis.insert(
        "conversion_rate".into(),
        KpiValue::Percent(round1(conversion)),
    );

    let months = month_labels(filters);
    let trends = TrendSeries {
        lines: vec![
            amount_line(rng, "revenue", revenue, months.len()),
            count_line(rng, "orders", orders, months.len()),
        ],
        months,
    };
    let breakdown = breakdown(rng, filters, "regions", revenue);

    RunResults {
        kpis,
        trends,
        breakdown,
    }
}

fn procurement_results(filters: &FilterValues, orders: u64, rng: &mut StdRng) -> RunResults {
    let po_value = rng.random_range(2_000.0..=22_000.0);
    let spend = round2(po_value * orders as f64);
    let avg_po_value = if orders > 0 { spend / orders as f64 } else { 0.0 };
    // The demo data targets a 92% on-time delivery rate.
    let on_time = round1(rng.random_range(85.0..=97.0));

    let mut kpis = KpiResult::new();
    kpis.insert("total_spend".into(), KpiValue::Amount(spend));
    kpis.insert("purchase_orders".into(), KpiValue::Count(orders));
    kpis.insert("avg_po_value".into(), KpiValue::Amount(avg_po_value));
    kpis.insert("on_time_delivery".into(), KpiValue::Percent(on_time));

    let months = month_labels(filters);
    let trends = TrendSeries {
        lines: vec![
            amount_line(rng, "spend", spend, months.len()),
            count_line(rng, "orders", orders, months.len()),
        ],
        months,
    };
    let breakdown = breakdown(rng, filters, "material_groups", spend);

    RunResults {
        kpis,
        trends,
        breakdown,
    }
}

fn finance_results(filters: &FilterValues, postings: u64, rng: &mut StdRng) -> RunResults {
    let posting_value = rng.random_range(500.0..=20_000.0);
    // Income postings carry roughly 60% of the absolute amounts.
    let income = round2(postings as f64 * posting_value * 0.6);
    let expenses = round2(income * rng.random_range(0.55..=0.90));
    let net_income = round2(income - expenses);
    let margin = if income > 0.0 {
        KpiValue::Percent(round1(net_income / income * 100.0))
    } else {
        KpiValue::Undefined
    };

    let mut kpis = KpiResult::new();
    kpis.insert("net_income".into(), KpiValue::Amount(net_income));
    kpis.insert("operating_margin".into(), margin);
    kpis.insert("total_expenses".into(), KpiValue::Amount(expenses));
    kpis.insert("posting_count".into(), KpiValue::Count(postings));

    let months = month_labels(filters);
    let trends = TrendSeries {
        lines: vec![
            amount_line(rng, "income", income, months.len()),
            amount_line(rng, "expenses", expenses, months.len()),
        ],
        months,
    };
    let breakdown = breakdown(rng, filters, "cost_centers", round2(income + expenses));

    RunResults {
        kpis,
        trends,
        breakdown,
    }
}

// =============================================================================
// Trend and breakdown synthesis
// =============================================================================

/// Month labels spanned by the filter range; a full calendar year when the
/// range is unbounded.
fn month_labels(filters: &FilterValues) -> Vec<String> {
    match &filters.range {
        Some(RangeBound::Dates {
            from: Some(from),
            to: Some(to),
        }) => {
            use chrono::Datelike;
            span_labels(
                (from.year(), from.month()),
                (to.year(), to.month()),
            )
        }
        Some(RangeBound::Periods {
            from: Some(from),
            to: Some(to),
        }) => span_labels(period_parts(from), period_parts(to)),
        _ => MONTHS.iter().map(|m| m.to_string()).collect(),
    }
}

fn span_labels(from: (i32, u32), to: (i32, u32)) -> Vec<String> {
    let total = (to.0 - from.0) * 12 + to.1 as i32 - from.1 as i32 + 1;
    let total = total.clamp(1, MAX_TREND_POINTS);

    let mut labels = Vec::with_capacity(total as usize);
    let mut month = from.1;
    for _ in 0..total {
        labels.push(MONTHS[(month - 1) as usize].to_string());
        month = month % 12 + 1;
    }
    labels
}

/// Split a validated `YYYY-MM` period into (year, month).
fn month_span(from: &str, to: &str) -> i32 {
    let from = period_parts(from);
    let to = period_parts(to);
    ((to.0 - from.0) * 12 + to.1 as i32 - from.1 as i32 + 1).max(1)
}

fn period_parts(period: &str) -> (i32, u32) {
    let year = period[..4].parse().expect("period format is validated");
    let month = period[5..7].parse().expect("period format is validated");
    (year, month)
}

fn amount_line(rng: &mut StdRng, name: &str, total: f64, points: usize) -> TrendLine {
    TrendLine {
        name: name.to_string(),
        values: split_amounts(rng, total, points),
    }
}

fn count_line(rng: &mut StdRng, name: &str, total: u64, points: usize) -> TrendLine {
    TrendLine {
        name: name.to_string(),
        values: split_counts(rng, total, points)
            .into_iter()
            .map(|c| c as f64)
            .collect(),
    }
}

/// Split an amount across n buckets with seeded weights; buckets sum to the
/// total up to rounding.
fn split_amounts(rng: &mut StdRng, total: f64, n: usize) -> Vec<f64> {
    let weights = weights(rng, n);
    let sum: f64 = weights.iter().sum();
    weights.into_iter().map(|w| round2(total * w / sum)).collect()
}

/// Split a count across n buckets; buckets sum to the total exactly.
fn split_counts(rng: &mut StdRng, total: u64, n: usize) -> Vec<u64> {
    let weights = weights(rng, n);
    let sum: f64 = weights.iter().sum();
    let mut buckets: Vec<u64> = weights
        .iter()
        .map(|w| (total as f64 * w / sum).floor() as u64)
        .collect();
    let assigned: u64 = buckets.iter().sum();
    if let Some(first) = buckets.first_mut() {
        *first += total - assigned;
    }
    buckets
}

fn weights(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(0.5..=1.5)).collect()
}

/// Distribute the headline amount across the breakdown dimension. Labels are
/// the selected values when the dimension is filtered, the full allowed list
/// otherwise; rows come out sorted by value, capped at ten.
fn breakdown(
    rng: &mut StdRng,
    filters: &FilterValues,
    field_name: &'static str,
    total: f64,
) -> Breakdown {
    let spec = FilterSpec::of(filters.domain);
    let field = spec
        .field(field_name)
        .expect("breakdown dimension is part of the filter contract");

    let labels: Vec<String> = match filters.selection(field_name) {
        Some(values) => values.to_vec(),
        None => field.allowed.iter().map(|v| v.to_string()).collect(),
    };

    let values = split_amounts(rng, total, labels.len());
    let mut rows: Vec<BreakdownRow> = labels
        .into_iter()
        .zip(values)
        .map(|(label, value)| BreakdownRow { label, value })
        .collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows.truncate(MAX_BREAKDOWN_ROWS);

    Breakdown {
        dimension: field.column.to_string(),
        rows,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
