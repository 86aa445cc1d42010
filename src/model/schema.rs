//! Gold-table schema registry.
//!
//! Declares, per domain, the fact table backing the dashboard: name, columns,
//! and types. The registry is the contract with any eventual real backend -
//! downstream KPI documentation references these columns by name, so the
//! definitions here must not drift.

use std::sync::LazyLock;

use crate::model::Domain;
use crate::sql::ddl::{ColumnDef, CreateIndex, CreateTable, DdlStatement};
use crate::sql::{col, lit_str, DataType, Dialect, ExprExt};

/// Schema all gold tables live in.
pub const GOLD_SCHEMA: &str = "mart";

/// A column of a gold table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub data_type: DataType,
    pub description: &'static str,
}

/// A gold table definition: the analytics-ready fact table for one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub domain: Domain,
    pub table: &'static str,
    pub description: &'static str,
    pub columns: Vec<Column>,
}

impl Schema {
    /// Look up the schema for a domain. Total: the domain enum is closed.
    pub fn of(domain: Domain) -> &'static Schema {
        match domain {
            Domain::Sales => &REGISTRY[0],
            Domain::Procurement => &REGISTRY[1],
            Domain::Finance => &REGISTRY[2],
        }
    }

    /// Schema-qualified table name, e.g. `mart.sales_orders_fact`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", GOLD_SCHEMA, self.table)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The DDL statements declaring this table: CREATE TABLE plus one index
    /// per filterable column.
    pub fn ddl(&self) -> Vec<DdlStatement> {
        let mut statements = Vec::new();

        let mut table = CreateTable::new(self.table).schema(GOLD_SCHEMA);
        for column in &self.columns {
            table = table.column(column_def(self.domain, column));
        }
        statements.push(DdlStatement::CreateTable(table));

        for indexed in indexed_columns(self.domain) {
            statements.push(DdlStatement::CreateIndex(
                CreateIndex::new(format!("ix_{}_{}", self.table, indexed), self.table)
                    .schema(GOLD_SCHEMA)
                    .column(*indexed),
            ));
        }

        statements
    }

    /// Render the DDL as one script.
    pub fn ddl_sql(&self, dialect: Dialect) -> String {
        self.ddl()
            .iter()
            .map(|s| format!("{};", s.to_sql(dialect)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Shorthand for `Schema::of`.
pub fn get_schema(domain: Domain) -> &'static Schema {
    Schema::of(domain)
}

fn column_def(domain: Domain, column: &Column) -> ColumnDef {
    let mut def = ColumnDef::new(column.name, column.data_type);

    // Surrogate keys and nullability follow the source data: only
    // visitor_id and the procurement delivery dates may be absent.
    let key = primary_key_column(domain);
    if column.name == key {
        def = def.primary_key();
    } else if !matches!(
        column.name,
        "visitor_id" | "requested_delivery_date" | "actual_delivery_date"
    ) {
        def = def.not_null();
    }

    if column.name == "account_type" {
        def = def.check(col("account_type").in_list(vec![
            lit_str("REVENUE"),
            lit_str("OPERATING_INCOME"),
            lit_str("EXPENSE"),
        ]));
    }

    def
}

fn primary_key_column(domain: Domain) -> &'static str {
    match domain {
        Domain::Sales => "order_id",
        Domain::Procurement => "purchase_order_id",
        Domain::Finance => "posting_id",
    }
}

fn indexed_columns(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Sales => &["order_date", "region", "product_category", "channel"],
        Domain::Procurement => &["purchase_date", "supplier", "material_group", "plant"],
        Domain::Finance => &["posting_period", "company_code", "cost_center", "account"],
    }
}

static REGISTRY: LazyLock<[Schema; 3]> = LazyLock::new(|| {
    [
        Schema {
            domain: Domain::Sales,
            table: "sales_orders_fact",
            description: "Aggregated sales order data",
            columns: vec![
                Column {
                    name: "order_id",
                    data_type: DataType::Int64,
                    description: "Order identifier",
                },
                Column {
                    name: "order_date",
                    data_type: DataType::Date,
                    description: "Order date",
                },
                Column {
                    name: "region",
                    data_type: DataType::Varchar(32),
                    description: "Sales region",
                },
                Column {
                    name: "product_category",
                    data_type: DataType::Varchar(64),
                    description: "Product category",
                },
                Column {
                    name: "channel",
                    data_type: DataType::Varchar(32),
                    description: "Sales channel",
                },
                Column {
                    name: "revenue",
                    data_type: DataType::Decimal(12, 2),
                    description: "Order revenue",
                },
                Column {
                    name: "visitor_id",
                    data_type: DataType::Varchar(36),
                    description: "Visitor identifier",
                },
            ],
        },
        Schema {
            domain: Domain::Procurement,
            table: "procurement_orders_fact",
            description: "Aggregated procurement order data",
            columns: vec![
                Column {
                    name: "purchase_order_id",
                    data_type: DataType::Int64,
                    description: "Purchase order identifier",
                },
                Column {
                    name: "purchase_date",
                    data_type: DataType::Date,
                    description: "Purchase date",
                },
                Column {
                    name: "supplier",
                    data_type: DataType::Varchar(64),
                    description: "Supplier name",
                },
                Column {
                    name: "material_group",
                    data_type: DataType::Varchar(64),
                    description: "Material group",
                },
                Column {
                    name: "plant",
                    data_type: DataType::Varchar(32),
                    description: "Plant code",
                },
                Column {
                    name: "spend",
                    data_type: DataType::Decimal(12, 2),
                    description: "Purchase spend",
                },
                Column {
                    name: "requested_delivery_date",
                    data_type: DataType::Date,
                    description: "Requested delivery date",
                },
                Column {
                    name: "actual_delivery_date",
                    data_type: DataType::Date,
                    description: "Actual delivery date",
                },
            ],
        },
        Schema {
            domain: Domain::Finance,
            table: "gl_postings_fact",
            description: "Aggregated general ledger posting data",
            columns: vec![
                Column {
                    name: "posting_id",
                    data_type: DataType::Int64,
                    description: "Posting identifier",
                },
                Column {
                    name: "posting_period",
                    data_type: DataType::Varchar(7),
                    description: "Posting period (YYYY-MM)",
                },
                Column {
                    name: "company_code",
                    data_type: DataType::Varchar(8),
                    description: "Company code",
                },
                Column {
                    name: "cost_center",
                    data_type: DataType::Varchar(16),
                    description: "Cost center",
                },
                Column {
                    name: "account",
                    data_type: DataType::Varchar(16),
                    description: "GL account",
                },
                Column {
                    name: "account_type",
                    data_type: DataType::Varchar(16),
                    description: "Account type (REVENUE, OPERATING_INCOME, EXPENSE)",
                },
                Column {
                    name: "amount",
                    data_type: DataType::Decimal(14, 2),
                    description: "Posting amount",
                },
            ],
        },
    ]
});
