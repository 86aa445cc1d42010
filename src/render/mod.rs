//! Query renderer: filter values to display SQL.
//!
//! Pure string construction - nothing here executes. The rendered text is
//! shown to users as the query a real backend would run, so literals are
//! escaped, IN-lists parenthesized, and the output always parses.

use crate::model::{Domain, FilterSpec, FilterValues, RangeBound, RenderedQuery, Schema};
use crate::sql::{
    abs, avg, col, count_distinct, count_star, lit_int, lit_str, sum, Dialect, Expr, ExprExt,
    Query, SelectExpr, TableRef,
};

/// Render the WHERE clause and the full illustrative SELECT for a validated
/// filter snapshot. Deterministic and pure.
pub fn render(filters: &FilterValues, dialect: Dialect) -> RenderedQuery {
    let where_expr = where_expr(filters);
    let where_sql = where_expr.to_tokens().serialize(dialect);
    let select_sql = select_query(filters.domain, where_expr).to_sql(dialect);

    RenderedQuery {
        domain: filters.domain,
        where_sql,
        select_sql,
    }
}

/// One predicate per populated bound/field, ANDed in contract order.
/// An empty filter renders the constant predicate `1 = 1`.
fn where_expr(filters: &FilterValues) -> Expr {
    let spec = FilterSpec::of(filters.domain);
    let range_field = spec.range_field();
    let mut predicates: Vec<Expr> = Vec::new();

    match &filters.range {
        Some(RangeBound::Dates { from, to }) => {
            if let Some(from) = from {
                predicates.push(col(range_field.column).gte(lit_str(&from.to_string())));
            }
            if let Some(to) = to {
                predicates.push(col(range_field.column).lte(lit_str(&to.to_string())));
            }
        }
        Some(RangeBound::Periods { from, to }) => {
            if let Some(from) = from {
                predicates.push(col(range_field.column).gte(lit_str(from)));
            }
            if let Some(to) = to {
                predicates.push(col(range_field.column).lte(lit_str(to)));
            }
        }
        None => {}
    }

    for field in spec.multi_selects() {
        if let Some(values) = filters.selection(field.name) {
            let literals = values.iter().map(|v| lit_str(v)).collect();
            predicates.push(col(field.column).in_list(literals));
        }
    }

    predicates
        .into_iter()
        .reduce(|acc, p| acc.and(p))
        .unwrap_or_else(|| lit_int(1).eq(lit_int(1)))
}

/// The per-domain KPI aggregate query over the gold table.
fn select_query(domain: Domain, where_expr: Expr) -> Query {
    Query::new()
        .select(kpi_select_list(domain))
        .from(TableRef::new(Schema::of(domain).table).with_schema(crate::model::GOLD_SCHEMA))
        .filter(where_expr)
}

fn kpi_select_list(domain: Domain) -> Vec<SelectExpr> {
    match domain {
        Domain::Sales => vec![
            sum(col("revenue")).alias("total_revenue"),
            count_star().alias("total_orders"),
            avg(col("revenue")).alias("avg_order_value"),
            count_distinct(col("visitor_id")).alias("unique_visitors"),
        ],
        Domain::Procurement => vec![
            sum(col("spend")).alias("total_spend"),
            count_star().alias("purchase_orders"),
            avg(col("spend")).alias("avg_po_value"),
            count_distinct(col("supplier")).alias("unique_suppliers"),
        ],
        Domain::Finance => vec![
            sum(account_type_case("REVENUE", col("amount"))).alias("total_income"),
            sum(account_type_case("EXPENSE", abs(col("amount")))).alias("total_expenses"),
            sum(col("amount")).alias("net_income"),
            count_star().alias("posting_count"),
        ],
    }
}

/// `CASE WHEN account_type = '<type>' THEN <then> ELSE 0 END`
fn account_type_case(account_type: &str, then: Expr) -> Expr {
    Expr::Case {
        operand: None,
        when_clauses: vec![(col("account_type").eq(lit_str(account_type)), then)],
        else_clause: Some(Box::new(lit_int(0))),
    }
}
