//! SQL dialect definitions and formatting rules.
//!
//! The rendered SQL is display-only (transparency previews and DDL listings),
//! but it must stay syntactically valid so it could later be handed to a real
//! executor. Dialect differences are confined to quoting, boolean literals,
//! and data type spellings.
//!
//! `Ansi` is kept as a reference dialect; `Postgres` is the default because
//! the gold tables live in a Postgres mart.

use super::types::DataType;

/// SQL dialect trait - defines how dialect-sensitive fragments are rendered.
pub trait SqlDialect: std::fmt::Debug {
    /// Dialect name for display.
    fn name(&self) -> &'static str;

    /// Quote an identifier (table, column, alias).
    ///
    /// Identifiers that are already valid bare SQL identifiers are emitted
    /// as-is, so rendered previews read like hand-written SQL
    /// (`region IN ('DACH')` rather than `"region" IN ('DACH')`).
    fn quote_identifier(&self, ident: &str) -> String {
        if is_bare_identifier(ident) {
            ident.to_string()
        } else {
            format!("\"{}\"", ident.replace('"', "\"\""))
        }
    }

    /// Quote a string literal. Single quotes, `''` for escaping.
    fn quote_string(&self, s: &str) -> String {
        format!("'{}'", s.replace('\'', "''"))
    }

    /// Format a boolean literal.
    fn format_bool(&self, b: bool) -> &'static str {
        if b {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    /// Spell a column data type for DDL.
    fn emit_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::Int64 => "BIGINT".into(),
            DataType::Decimal(p, s) => format!("NUMERIC({}, {})", p, s),
            DataType::Varchar(n) => format!("VARCHAR({})", n),
            DataType::Date => "DATE".into(),
        }
    }
}

/// A bare identifier needs no quoting: lowercase start, then lowercase
/// alphanumerics and underscores, and not a reserved word.
fn is_bare_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_');
    head_ok
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !is_reserved(ident)
}

fn is_reserved(ident: &str) -> bool {
    matches!(
        ident,
        "select"
            | "from"
            | "where"
            | "and"
            | "or"
            | "not"
            | "as"
            | "in"
            | "between"
            | "group"
            | "order"
            | "by"
            | "limit"
            | "case"
            | "when"
            | "then"
            | "else"
            | "end"
            | "table"
            | "index"
            | "create"
            | "primary"
            | "key"
            | "default"
            | "check"
            | "null"
            | "true"
            | "false"
            | "user"
            | "distinct"
    )
}

/// ANSI reference dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl SqlDialect for Ansi {
    fn name(&self) -> &'static str {
        "ansi"
    }
}

/// PostgreSQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl SqlDialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }
}

/// Supported dialects as a copyable enum for easy parameter passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
    Ansi,
}

impl Dialect {
    /// Get the dialect implementation.
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::Postgres => &Postgres,
            Dialect::Ansi => &Ansi,
        }
    }

    pub fn name(&self) -> &'static str {
        self.dialect().name()
    }
}

// Convenience passthroughs so callers can write `dialect.quote_string(...)`.
impl Dialect {
    pub fn quote_identifier(&self, ident: &str) -> String {
        self.dialect().quote_identifier(ident)
    }

    pub fn quote_string(&self, s: &str) -> String {
        self.dialect().quote_string(s)
    }

    pub fn format_bool(&self, b: bool) -> &'static str {
        self.dialect().format_bool(b)
    }

    pub fn emit_data_type(&self, data_type: &DataType) -> String {
        self.dialect().emit_data_type(data_type)
    }
}
