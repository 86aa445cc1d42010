use dataportal::model::{get_schema, Domain, Schema};
use dataportal::sql::DataType;
use dataportal::PortalError;

#[test]
fn test_domain_parse_roundtrip() {
    for domain in Domain::ALL {
        assert_eq!(domain.as_str().parse::<Domain>().unwrap(), domain);
    }
}

#[test]
fn test_unknown_domain_tag() {
    let err = "hr".parse::<Domain>().unwrap_err();
    assert_eq!(err, PortalError::UnknownDomain("hr".into()));
}

#[test]
fn test_domain_serde_tags() {
    assert_eq!(
        serde_json::to_string(&Domain::Procurement).unwrap(),
        "\"procurement\""
    );
    let parsed: Domain = serde_json::from_str("\"finance\"").unwrap();
    assert_eq!(parsed, Domain::Finance);
}

#[test]
fn test_sales_schema_contract() {
    let schema = get_schema(Domain::Sales);
    assert_eq!(schema.qualified_name(), "mart.sales_orders_fact");

    let columns: Vec<&str> = schema.columns.iter().map(|c| c.name).collect();
    assert_eq!(
        columns,
        [
            "order_id",
            "order_date",
            "region",
            "product_category",
            "channel",
            "revenue",
            "visitor_id",
        ]
    );
    assert_eq!(
        schema.column("revenue").unwrap().data_type,
        DataType::Decimal(12, 2)
    );
    assert_eq!(
        schema.column("order_date").unwrap().data_type,
        DataType::Date
    );
}

#[test]
fn test_procurement_schema_contract() {
    let schema = Schema::of(Domain::Procurement);
    assert_eq!(schema.qualified_name(), "mart.procurement_orders_fact");

    let columns: Vec<&str> = schema.columns.iter().map(|c| c.name).collect();
    assert_eq!(
        columns,
        [
            "purchase_order_id",
            "purchase_date",
            "supplier",
            "material_group",
            "plant",
            "spend",
            "requested_delivery_date",
            "actual_delivery_date",
        ]
    );
}

#[test]
fn test_finance_schema_contract() {
    let schema = Schema::of(Domain::Finance);
    assert_eq!(schema.qualified_name(), "mart.gl_postings_fact");

    let columns: Vec<&str> = schema.columns.iter().map(|c| c.name).collect();
    assert_eq!(
        columns,
        [
            "posting_id",
            "posting_period",
            "company_code",
            "cost_center",
            "account",
            "account_type",
            "amount",
        ]
    );
    assert_eq!(
        schema.column("amount").unwrap().data_type,
        DataType::Decimal(14, 2)
    );
    assert_eq!(
        schema.column("posting_period").unwrap().data_type,
        DataType::Varchar(7)
    );
}
