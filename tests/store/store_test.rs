use std::sync::Arc;

use dataportal::mock::generate;
use dataportal::model::{validate, Domain, FilterValues, RawFilters, Run, RunId};
use dataportal::render::render;
use dataportal::sql::Dialect;
use dataportal::store::RunStore;
use dataportal::PortalError;

fn submit(store: &RunStore, domain: Domain, raw: RawFilters) -> Arc<Run> {
    let filters = validate(domain, &raw).unwrap();
    let query = render(&filters, Dialect::Postgres);
    let results = generate(&filters);
    store.submit(domain, filters, query, results)
}

#[test]
fn test_submit_get_roundtrip() {
    let store = RunStore::new();
    let submitted = submit(
        &store,
        Domain::Sales,
        RawFilters::new()
            .range("2024-01-01", "2024-01-31")
            .select("regions", ["DACH"]),
    );

    let reopened = store.get(submitted.id).unwrap();
    assert_eq!(*reopened, *submitted);
}

#[test]
fn test_reopen_returns_canonical_snapshot() {
    let store = RunStore::new();
    let submitted = submit(&store, Domain::Finance, RawFilters::new());

    // Reopening twice yields the same stored record, not a regeneration.
    let first = store.get(submitted.id).unwrap();
    let second = store.get(submitted.id).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.results, submitted.results);
}

#[test]
fn test_ids_are_monotonic_and_start_at_one() {
    let store = RunStore::new();
    for expected in 1..=5u64 {
        let run = submit(&store, Domain::Sales, RawFilters::new());
        assert_eq!(run.id, RunId(expected));
    }
}

#[test]
fn test_get_unknown_run() {
    let store = RunStore::new();
    submit(&store, Domain::Sales, RawFilters::new());
    assert_eq!(
        store.get(RunId(2)).unwrap_err(),
        PortalError::RunNotFound(RunId(2))
    );
}

#[test]
fn test_list_is_newest_first() {
    let store = RunStore::new();
    submit(&store, Domain::Sales, RawFilters::new());
    submit(&store, Domain::Finance, RawFilters::new());
    submit(&store, Domain::Procurement, RawFilters::new());

    let ids: Vec<RunId> = store.list(None).iter().map(|r| r.id).collect();
    assert_eq!(ids, [RunId(3), RunId(2), RunId(1)]);
}

#[test]
fn test_list_filters_by_domain() {
    let store = RunStore::new();
    submit(&store, Domain::Sales, RawFilters::new());
    submit(&store, Domain::Procurement, RawFilters::new());

    let procurement = store.list(Some(Domain::Procurement));
    assert_eq!(procurement.len(), 1);
    assert!(procurement.iter().all(|r| r.domain == Domain::Procurement));

    assert!(store.list(Some(Domain::Finance)).is_empty());
}

#[test]
fn test_len_counts_all_runs() {
    let store = RunStore::new();
    assert!(store.is_empty());
    submit(&store, Domain::Sales, RawFilters::new());
    submit(&store, Domain::Sales, RawFilters::new());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_run_snapshot_carries_filters_and_sql() {
    let store = RunStore::new();
    let run = submit(
        &store,
        Domain::Procurement,
        RawFilters::new().select("plants", ["Plant 200"]),
    );

    assert_eq!(run.domain, Domain::Procurement);
    assert_eq!(run.filters.summary(), "plant: Plant 200");
    assert!(run.query.where_sql.contains("plant IN ('Plant 200')"));
    assert_eq!(
        run.display_name(),
        "Procurement - plant: Plant 200"
    );
}

#[test]
fn test_identical_filters_are_distinct_runs() {
    let store = RunStore::new();
    let filters = FilterValues::none(Domain::Sales);

    let first = store.submit(
        Domain::Sales,
        filters.clone(),
        render(&filters, Dialect::Postgres),
        generate(&filters),
    );
    let second = store.submit(
        Domain::Sales,
        filters.clone(),
        render(&filters, Dialect::Postgres),
        generate(&filters),
    );

    assert_ne!(first.id, second.id);
    // Same seed, same numbers - only identity and timestamp differ.
    assert_eq!(first.results, second.results);
}
