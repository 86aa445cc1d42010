//! DDL (Data Definition Language) support.
//!
//! Builders for the CREATE TABLE / CREATE INDEX statements that declare the
//! gold tables. The statements are rendered for display and documentation;
//! they are also the contract any real backend must match.
//!
//! # Example
//!
//! ```ignore
//! use dataportal::sql::ddl::{ColumnDef, CreateTable};
//! use dataportal::sql::{DataType, Dialect};
//!
//! let table = CreateTable::new("sales_orders_fact")
//!     .schema("mart")
//!     .column(ColumnDef::new("order_id", DataType::Int64).primary_key())
//!     .column(ColumnDef::new("order_date", DataType::Date).not_null());
//! println!("{}", table.to_sql(Dialect::Postgres));
//! ```

use super::dialect::Dialect;
use super::expr::Expr;
use super::token::{Token, TokenStream};
use super::types::DataType;

/// DDL statement types.
#[derive(Debug, Clone)]
pub enum DdlStatement {
    CreateTable(CreateTable),
    CreateIndex(CreateIndex),
}

impl DdlStatement {
    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens().serialize(dialect)
    }

    pub fn to_tokens(&self) -> TokenStream {
        match self {
            DdlStatement::CreateTable(ct) => ct.to_tokens(),
            DdlStatement::CreateIndex(ci) => ci.to_tokens(),
        }
    }
}

// ============================================================================
// CREATE TABLE
// ============================================================================

/// CREATE TABLE statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateTable {
    pub if_not_exists: bool,
    pub schema: Option<String>,
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

impl CreateTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            if_not_exists: false,
            schema: None,
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Set the schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Add IF NOT EXISTS.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Add a column definition.
    pub fn column(mut self, col: ColumnDef) -> Self {
        self.columns.push(col);
        self
    }

    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens().serialize(dialect)
    }

    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Create).space().push(Token::Table);

        if self.if_not_exists {
            ts.space()
                .push(Token::If)
                .space()
                .push(Token::Not)
                .space()
                .push(Token::Exists);
        }

        ts.space().push(Token::QualifiedIdent {
            schema: self.schema.clone(),
            name: self.name.clone(),
        });

        ts.space().lparen();
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                ts.comma();
            }
            ts.newline().indent(1);
            ts.append(&col.to_tokens());
        }
        ts.newline().rparen();

        ts
    }
}

// ============================================================================
// Column definition
// ============================================================================

/// Column definition for CREATE TABLE.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub not_null: bool,
    pub primary_key: bool,
    pub default: Option<Expr>,
    pub check: Option<Expr>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            not_null: false,
            primary_key: false,
            default: None,
            check: None,
        }
    }

    /// Mark column as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark column as PRIMARY KEY.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Set a default value.
    pub fn default(mut self, expr: Expr) -> Self {
        self.default = Some(expr);
        self
    }

    /// Attach a CHECK constraint.
    pub fn check(mut self, expr: Expr) -> Self {
        self.check = Some(expr);
        self
    }

    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Ident(self.name.clone()));
        ts.space()
            .push(Token::Raw(self.data_type.to_string()));

        if self.primary_key {
            ts.space().push(Token::Primary).space().push(Token::Key);
        }

        if self.not_null {
            ts.space().push(Token::Not).space().push(Token::Null);
        }

        if let Some(ref expr) = self.default {
            ts.space()
                .push(Token::Default)
                .space()
                .append(&expr.to_tokens());
        }

        if let Some(ref expr) = self.check {
            ts.space()
                .push(Token::Check)
                .space()
                .lparen()
                .append(&expr.to_tokens())
                .rparen();
        }

        ts
    }
}

// ============================================================================
// CREATE INDEX
// ============================================================================

/// CREATE INDEX statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateIndex {
    pub unique: bool,
    pub name: String,
    pub schema: Option<String>,
    pub table: String,
    pub columns: Vec<String>,
}

impl CreateIndex {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            unique: false,
            name: name.into(),
            schema: None,
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Set the table's schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Add an indexed column.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens().serialize(dialect)
    }

    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Create).space();
        if self.unique {
            ts.push(Token::Unique).space();
        }
        ts.push(Token::Index)
            .space()
            .push(Token::Ident(self.name.clone()))
            .space()
            .push(Token::On)
            .space()
            .push(Token::QualifiedIdent {
                schema: self.schema.clone(),
                name: self.table.clone(),
            });

        ts.space().lparen();
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                ts.comma().space();
            }
            ts.push(Token::Ident(col.clone()));
        }
        ts.rparen();

        ts
    }
}
