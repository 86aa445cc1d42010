use dataportal::model::{Domain, Schema};
use dataportal::sql::verify::validate_sql;
use dataportal::sql::Dialect;

#[test]
fn test_ddl_parses_for_all_domains() {
    for domain in Domain::ALL {
        let script = Schema::of(domain).ddl_sql(Dialect::Postgres);
        validate_sql(&script, Dialect::Postgres).unwrap();
    }
}

#[test]
fn test_sales_ddl_column_definitions() {
    let script = Schema::of(Domain::Sales).ddl_sql(Dialect::Postgres);

    assert!(script.contains("CREATE TABLE mart.sales_orders_fact ("));
    for line in [
        "order_id BIGINT PRIMARY KEY",
        "order_date DATE NOT NULL",
        "region VARCHAR(32) NOT NULL",
        "product_category VARCHAR(64) NOT NULL",
        "channel VARCHAR(32) NOT NULL",
        "revenue NUMERIC(12, 2) NOT NULL",
        "visitor_id VARCHAR(36)",
    ] {
        assert!(script.contains(line), "missing {:?} in:\n{}", line, script);
    }
    // visitor_id may be absent in the source data
    assert!(!script.contains("visitor_id VARCHAR(36) NOT NULL"));
}

#[test]
fn test_procurement_ddl_nullable_delivery_dates() {
    let script = Schema::of(Domain::Procurement).ddl_sql(Dialect::Postgres);

    assert!(script.contains("purchase_order_id BIGINT PRIMARY KEY"));
    assert!(script.contains("spend NUMERIC(12, 2) NOT NULL"));
    assert!(!script.contains("requested_delivery_date DATE NOT NULL"));
    assert!(!script.contains("actual_delivery_date DATE NOT NULL"));
}

#[test]
fn test_finance_ddl_account_type_check() {
    let script = Schema::of(Domain::Finance).ddl_sql(Dialect::Postgres);

    assert!(script.contains("CREATE TABLE mart.gl_postings_fact ("));
    assert!(script.contains(
        "account_type VARCHAR(16) NOT NULL \
         CHECK (account_type IN ('REVENUE', 'OPERATING_INCOME', 'EXPENSE'))"
    ));
    assert!(script.contains("amount NUMERIC(14, 2) NOT NULL"));
}

#[test]
fn test_filter_columns_are_indexed() {
    let script = Schema::of(Domain::Sales).ddl_sql(Dialect::Postgres);
    for index in [
        "CREATE INDEX ix_sales_orders_fact_order_date ON mart.sales_orders_fact (order_date);",
        "CREATE INDEX ix_sales_orders_fact_region ON mart.sales_orders_fact (region);",
        "CREATE INDEX ix_sales_orders_fact_product_category ON mart.sales_orders_fact (product_category);",
        "CREATE INDEX ix_sales_orders_fact_channel ON mart.sales_orders_fact (channel);",
    ] {
        assert!(script.contains(index), "missing {:?} in:\n{}", index, script);
    }

    let finance = Schema::of(Domain::Finance).ddl_sql(Dialect::Postgres);
    assert!(finance
        .contains("CREATE INDEX ix_gl_postings_fact_posting_period ON mart.gl_postings_fact (posting_period);"));
}

#[test]
fn test_ddl_statement_count() {
    // One CREATE TABLE plus four indexes per domain.
    for domain in Domain::ALL {
        assert_eq!(Schema::of(domain).ddl().len(), 5);
    }
}
