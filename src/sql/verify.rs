//! Syntax verification of rendered SQL.
//!
//! Everything this crate emits is display-only, but it is shown to users as
//! the query a real backend would run, so it must always be parseable SQL.
//! sqlparser-rs provides the roundtrip check.

use sqlparser::dialect::{AnsiDialect, PostgreSqlDialect};
use sqlparser::parser::Parser;

use super::dialect::Dialect;

/// Validates that a SQL string is syntactically valid for the given dialect.
///
/// # Example
///
/// ```ignore
/// use dataportal::sql::{verify::validate_sql, Dialect};
///
/// validate_sql("SELECT * FROM mart.sales_orders_fact", Dialect::Postgres).unwrap();
/// ```
pub fn validate_sql(sql: &str, dialect: Dialect) -> Result<(), String> {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::Ansi => Box::new(AnsiDialect {}),
    };

    Parser::parse_sql(&*parser_dialect, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL for {:?}: {}\nSQL: {}", dialect, e, sql))
}

/// Validates a bare WHERE-clause fragment by embedding it in a probe query.
pub fn validate_where_clause(clause: &str, dialect: Dialect) -> Result<(), String> {
    validate_sql(&format!("SELECT * FROM probe WHERE {}", clause), dialect)
}
