//! SQL generation module.
//!
//! A type-safe SQL builder that renders the display SQL for this crate:
//!
//! - [`query`] - SELECT query builder
//! - [`expr`] - Expression AST and builder DSL
//! - [`ddl`] - CREATE TABLE / CREATE INDEX for the gold tables
//! - [`token`] - Token types for SQL generation
//! - [`dialect`] - SQL dialect implementations (Postgres, ANSI)
//! - [`verify`] - sqlparser-backed syntax verification

pub mod ddl;
pub mod dialect;
pub mod expr;
pub mod query;
pub mod token;
pub mod types;
pub mod verify;

pub use types::DataType;

// Re-export commonly used types at the sql module level
pub use dialect::{Dialect, SqlDialect};
pub use expr::{
    abs, avg, coalesce, col, count, count_distinct, count_star, func, lit_bool, lit_float,
    lit_int, lit_null, lit_str, star, sum, table_col, BinaryOperator, Expr, ExprExt, Literal,
    UnaryOperator,
};
pub use query::{OrderByExpr, Query, SelectExpr, SortDir, TableRef};
pub use token::{Token, TokenStream};

pub use ddl::{ColumnDef, CreateIndex, CreateTable, DdlStatement};
