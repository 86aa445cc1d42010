use dataportal::model::{
    get_filter_spec, validate, Domain, FilterKind, RangeBound, RawFilters, ValidationError,
};

fn inverted_raw(domain: Domain) -> RawFilters {
    match domain {
        Domain::Finance => RawFilters::new().range("2024-05", "2024-01"),
        _ => RawFilters::new().range("2024-05-01", "2024-01-01"),
    }
}

#[test]
fn test_inverted_range_rejected_for_every_domain() {
    for domain in Domain::ALL {
        let err = validate(domain, &inverted_raw(domain)).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvertedRange { .. }),
            "{}: expected InvertedRange, got {:?}",
            domain,
            err
        );
    }
}

#[test]
fn test_absent_filters_mean_no_restriction() {
    for domain in Domain::ALL {
        let values = validate(domain, &RawFilters::new()).unwrap();
        assert!(values.is_empty());
    }
}

#[test]
fn test_empty_selection_list_is_no_restriction() {
    let raw = RawFilters::new().select("regions", Vec::<String>::new());
    let values = validate(Domain::Sales, &raw).unwrap();
    assert!(values.is_empty());
}

#[test]
fn test_unknown_field_rejected() {
    let raw = RawFilters::new().select("warehouses", ["W1"]);
    assert_eq!(
        validate(Domain::Sales, &raw).unwrap_err(),
        ValidationError::UnknownField {
            domain: Domain::Sales,
            field: "warehouses".into(),
        }
    );
}

#[test]
fn test_range_field_is_not_selectable() {
    let raw = RawFilters::new().select("order_date", ["2024-01-01"]);
    assert_eq!(
        validate(Domain::Sales, &raw).unwrap_err(),
        ValidationError::NotSelectable {
            field: "order_date".into(),
        }
    );
}

#[test]
fn test_unknown_value_rejected() {
    let raw = RawFilters::new().select("plants", ["Plant 900"]);
    assert_eq!(
        validate(Domain::Procurement, &raw).unwrap_err(),
        ValidationError::UnknownValue {
            field: "plants".into(),
            value: "Plant 900".into(),
        }
    );
}

#[test]
fn test_blank_and_duplicate_values_rejected() {
    let raw = RawFilters::new().select("regions", ["  "]);
    assert!(matches!(
        validate(Domain::Sales, &raw).unwrap_err(),
        ValidationError::EmptyValue { .. }
    ));

    let raw = RawFilters::new().select("regions", ["DACH", "DACH"]);
    assert!(matches!(
        validate(Domain::Sales, &raw).unwrap_err(),
        ValidationError::DuplicateValue { .. }
    ));
}

#[test]
fn test_malformed_date_rejected() {
    for bad in ["01.05.2024", "2024-13-01", "2024-02-30", "yesterday"] {
        let raw = RawFilters::new().since(bad);
        assert!(
            matches!(
                validate(Domain::Sales, &raw).unwrap_err(),
                ValidationError::InvalidDate { .. }
            ),
            "expected InvalidDate for {:?}",
            bad
        );
    }
}

#[test]
fn test_malformed_period_rejected() {
    for bad in ["2024", "2024-13", "2024-1", "Jan 2024", "2024-01-01"] {
        let raw = RawFilters::new().since(bad);
        assert!(
            matches!(
                validate(Domain::Finance, &raw).unwrap_err(),
                ValidationError::InvalidPeriod { .. }
            ),
            "expected InvalidPeriod for {:?}",
            bad
        );
    }
}

#[test]
fn test_open_ended_ranges_accepted() {
    let values = validate(Domain::Sales, &RawFilters::new().since("2024-01-01")).unwrap();
    assert!(matches!(
        values.range,
        Some(RangeBound::Dates {
            from: Some(_),
            to: None
        })
    ));

    let values = validate(Domain::Finance, &RawFilters::new().until("2024-06")).unwrap();
    assert!(matches!(
        values.range,
        Some(RangeBound::Periods {
            from: None,
            to: Some(_)
        })
    ));
}

#[test]
fn test_equal_bounds_are_valid() {
    validate(Domain::Sales, &RawFilters::new().range("2024-01-15", "2024-01-15")).unwrap();
    validate(Domain::Finance, &RawFilters::new().range("2024-03", "2024-03")).unwrap();
}

#[test]
fn test_full_valid_input() {
    let raw = RawFilters::new()
        .range("2024-01-01", "2024-12-31")
        .select("regions", ["DACH", "Nordics"])
        .select("channels", ["Online"]);
    let values = validate(Domain::Sales, &raw).unwrap();
    assert_eq!(
        values.selection("regions").unwrap(),
        &["DACH".to_string(), "Nordics".to_string()]
    );
    assert_eq!(values.selection("channels").unwrap(), &["Online".to_string()]);
}

#[test]
fn test_contracts_match_documented_fields() {
    let sales = get_filter_spec(Domain::Sales);
    let names: Vec<&str> = sales.fields.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        ["order_date", "regions", "product_categories", "channels"]
    );
    assert_eq!(sales.range_field().kind, FilterKind::DateRange);

    let finance = get_filter_spec(Domain::Finance);
    assert_eq!(finance.range_field().kind, FilterKind::PeriodRange);
    assert_eq!(
        finance.field("accounts").unwrap().allowed,
        ["4000", "4010", "4100", "5000", "5100", "5200"]
    );

    let procurement = get_filter_spec(Domain::Procurement);
    assert_eq!(
        procurement.field("material_groups").unwrap().column,
        "material_group"
    );
}
