use dataportal::model::{validate, Domain, FilterValues, RawFilters};
use dataportal::render::render;
use dataportal::sql::verify::{validate_sql, validate_where_clause};
use dataportal::sql::Dialect;

fn filters(domain: Domain, raw: RawFilters) -> FilterValues {
    validate(domain, &raw).unwrap()
}

/// A grid of filter shapes per domain, from empty to fully populated.
fn filter_grid(domain: Domain) -> Vec<FilterValues> {
    let mut grid = vec![FilterValues::none(domain)];
    match domain {
        Domain::Sales => {
            grid.push(filters(domain, RawFilters::new().range("2024-01-01", "2024-06-30")));
            grid.push(filters(domain, RawFilters::new().select("regions", ["DACH"])));
            grid.push(filters(
                domain,
                RawFilters::new()
                    .range("2024-01-01", "2024-01-31")
                    .select("regions", ["DACH", "UK"])
                    .select("product_categories", ["Electronics"])
                    .select("channels", ["Online", "Retail"]),
            ));
        }
        Domain::Procurement => {
            grid.push(filters(domain, RawFilters::new().since("2024-03-01")));
            grid.push(filters(
                domain,
                RawFilters::new()
                    .select("suppliers", ["Supplier A", "Supplier B"])
                    .select("material_groups", ["Raw Materials"])
                    .select("plants", ["Plant 100"]),
            ));
        }
        Domain::Finance => {
            grid.push(filters(domain, RawFilters::new().range("2024-01", "2024-12")));
            grid.push(filters(
                domain,
                RawFilters::new()
                    .select("company_codes", ["1000"])
                    .select("cost_centers", ["CC100", "CC200"])
                    .select("accounts", ["4000", "5000"]),
            ));
        }
    }
    grid
}

#[test]
fn test_rendered_sql_parses_for_all_domains() {
    for domain in Domain::ALL {
        for filters in filter_grid(domain) {
            for dialect in [Dialect::Postgres, Dialect::Ansi] {
                let rendered = render(&filters, dialect);
                validate_where_clause(&rendered.where_sql, dialect).unwrap();
                validate_sql(&rendered.select_sql, dialect).unwrap();
            }
        }
    }
}

#[test]
fn test_one_predicate_per_populated_bound() {
    let filters = filters(
        Domain::Sales,
        RawFilters::new()
            .range("2024-01-01", "2024-01-31")
            .select("regions", ["DACH"]),
    );
    let rendered = render(&filters, Dialect::Postgres);

    // Two range bounds plus one multi-select: three predicates.
    let predicates: Vec<&str> = rendered.where_sql.split(" AND ").collect();
    assert_eq!(predicates.len(), 3, "WHERE: {}", rendered.where_sql);
}

#[test]
fn test_sales_scenario_where_clause() {
    let filters = filters(
        Domain::Sales,
        RawFilters::new()
            .range("2024-01-01", "2024-01-31")
            .select("regions", ["DACH"]),
    );
    let rendered = render(&filters, Dialect::Postgres);

    assert!(rendered.where_sql.contains("region IN ('DACH')"));
    assert!(rendered
        .where_sql
        .contains("order_date >= '2024-01-01' AND order_date <= '2024-01-31'"));
}

#[test]
fn test_empty_filter_renders_documented_tautology() {
    for domain in Domain::ALL {
        let rendered = render(&FilterValues::none(domain), Dialect::Postgres);
        assert_eq!(rendered.where_sql, "1 = 1");
        validate_where_clause(&rendered.where_sql, Dialect::Postgres).unwrap();
    }
}

#[test]
fn test_in_list_quoting_with_spaces() {
    let filters = filters(
        Domain::Procurement,
        RawFilters::new().select("suppliers", ["Supplier A", "Supplier C"]),
    );
    let rendered = render(&filters, Dialect::Postgres);
    assert!(rendered
        .where_sql
        .contains("supplier IN ('Supplier A', 'Supplier C')"));
}

#[test]
fn test_period_range_predicates() {
    let filters = filters(Domain::Finance, RawFilters::new().range("2024-01", "2024-06"));
    let rendered = render(&filters, Dialect::Postgres);
    assert_eq!(
        rendered.where_sql,
        "posting_period >= '2024-01' AND posting_period <= '2024-06'"
    );
}

#[test]
fn test_select_targets_gold_table() {
    let cases = [
        (Domain::Sales, "FROM mart.sales_orders_fact"),
        (Domain::Procurement, "FROM mart.procurement_orders_fact"),
        (Domain::Finance, "FROM mart.gl_postings_fact"),
    ];
    for (domain, expected_from) in cases {
        let rendered = render(&FilterValues::none(domain), Dialect::Postgres);
        assert!(
            rendered.select_sql.contains(expected_from),
            "{}: {}",
            domain,
            rendered.select_sql
        );
        assert!(rendered.select_sql.contains("WHERE 1 = 1"));
    }
}

#[test]
fn test_sales_select_aggregates() {
    let rendered = render(&FilterValues::none(Domain::Sales), Dialect::Postgres);
    for alias in [
        "SUM(revenue) AS total_revenue",
        "COUNT(*) AS total_orders",
        "AVG(revenue) AS avg_order_value",
        "COUNT(DISTINCT visitor_id) AS unique_visitors",
    ] {
        assert!(
            rendered.select_sql.contains(alias),
            "missing {:?} in {}",
            alias,
            rendered.select_sql
        );
    }
}

#[test]
fn test_render_is_deterministic() {
    let filters = filters(
        Domain::Finance,
        RawFilters::new()
            .range("2024-01", "2024-03")
            .select("cost_centers", ["CC300"]),
    );
    assert_eq!(
        render(&filters, Dialect::Postgres),
        render(&filters, Dialect::Postgres)
    );
}
