//! Hybrid search against a real SQLite store and the in-memory spy.

use std::collections::HashSet;

use traytrack::test_utils::fixtures::{DbFixture, MemoryStore, record};
use traytrack::{MatchSource, SearchEngine, TrackError};

use super::common::{full_record, records_named};

#[test]
fn test_substring_only_hit_is_exact() {
    let fixture = DbFixture::new().unwrap();
    fixture.add("CUTTING-STD", None).unwrap();

    let engine = SearchEngine::new(&fixture.db);
    let results = engine.search("ING-STD").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.tray_type.as_deref(), Some("CUTTING-STD"));
    assert_eq!(results[0].source, MatchSource::Exact);
    assert_eq!(results[0].score, None);
}

#[test]
fn test_short_query_matches_blank_fields() {
    let fixture = DbFixture::new().unwrap();
    fixture.add("CUTTING-STD", None).unwrap();

    let engine = SearchEngine::new(&fixture.db);
    let results = engine.search("STD").unwrap();

    // Blank make/dimensions/size sit exactly three edits from "std".
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, MatchSource::Fuzzy);
    assert_eq!(results[0].score, Some(0.25));
}

#[test]
fn test_misspelling_found_by_fuzzy_stage() {
    let fixture = DbFixture::new().unwrap();
    fixture.add("CUTTING-STD", None).unwrap();
    let id = fixture.add("PERFORATED", Some("ACME")).unwrap();

    let engine = SearchEngine::new(&fixture.db);
    let results = engine.search("perforatd").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), id);
    assert_eq!(results[0].source, MatchSource::Fuzzy);
    assert_eq!(results[0].score, Some(0.5));
}

#[test]
fn test_fuzzy_wins_over_exact_for_same_order() {
    let fixture = DbFixture::new().unwrap();
    fixture.add("PERFORATED", None).unwrap();

    let engine = SearchEngine::new(&fixture.db);
    let results = engine.search("PERFORATED").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, MatchSource::Fuzzy);
    assert_eq!(results[0].score, Some(1.0));
}

#[test]
fn test_distance_threshold_is_inclusive() {
    let store = MemoryStore::new(vec![record(1, "wxyd"), record(2, "wxyz")]);
    let engine = SearchEngine::new(&store);

    let results = engine.search("abcd").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), 1);
    assert_eq!(results[0].score, Some(0.25));
}

#[test]
fn test_empty_store_returns_nothing() {
    let fixture = DbFixture::new().unwrap();
    let engine = SearchEngine::new(&fixture.db);
    assert!(engine.search("anything").unwrap().is_empty());
}

#[test]
fn test_weak_fuzzy_outranks_exact() {
    let store = MemoryStore::new(vec![
        record(1, "LADDER-600-GALV"),
        record(2, "LADR"),
    ]);
    let engine = SearchEngine::new(&store);

    let results = engine.search("LADDER").unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id(), 2);
    assert_eq!(results[0].source, MatchSource::Fuzzy);
    assert_eq!(results[1].id(), 1);
    assert_eq!(results[1].source, MatchSource::Exact);
}

#[test]
fn test_results_capped_at_fifty() {
    let fixture = DbFixture::new().unwrap();
    for _ in 0..60 {
        fixture.add("CABLE", None).unwrap();
    }

    let engine = SearchEngine::new(&fixture.db);
    let results = engine.search("cable").unwrap();

    assert_eq!(results.len(), 50);
    assert!(results.iter().all(|r| r.source == MatchSource::Fuzzy));
}

#[test]
fn test_no_duplicate_ids() {
    let store = MemoryStore::new(records_named(120, "CABLE"));
    let engine = SearchEngine::new(&store);

    let results = engine.search("CABL").unwrap();
    let ids: HashSet<i64> = results.iter().map(|r| r.id()).collect();

    assert_eq!(ids.len(), results.len());
    assert_eq!(results.len(), 50);
}

#[test]
fn test_matches_any_descriptive_field() {
    let store = MemoryStore::new(vec![
        full_record(1, "CABLE", "ACME", "600x50", "L"),
        full_record(2, "LADDER", "BOLTCO", "300x100", "M"),
    ]);
    let engine = SearchEngine::new(&store);

    let by_make = engine.search("boltco").unwrap();
    assert_eq!(by_make[0].id(), 2);

    let by_dimensions = engine.search("600x5").unwrap();
    assert_eq!(by_dimensions[0].id(), 1);
}

#[test]
fn test_serial_and_code_are_substring_only() {
    let fixture = DbFixture::new().unwrap();
    let db = &fixture.db;
    let order = db
        .create_order(&traytrack::core::NewOrder {
            tray_type: Some("CABLE TRAY SYSTEM".to_string()),
            serial_no: Some("SN-7781".to_string()),
            ..Default::default()
        })
        .unwrap();

    let engine = SearchEngine::new(db);

    let by_serial = engine.search("7781").unwrap();
    assert_eq!(by_serial.len(), 1);
    assert_eq!(by_serial[0].source, MatchSource::Exact);

    let by_code = engine.search("ORD-0001").unwrap();
    assert_eq!(by_code.len(), 1);
    assert_eq!(by_code[0].id(), order.id);
    assert_eq!(by_code[0].source, MatchSource::Exact);
}

#[test]
fn test_underscore_is_not_a_wildcard() {
    let fixture = DbFixture::new().unwrap();
    fixture.add("abcdefghijklmnop", None).unwrap();

    let engine = SearchEngine::new(&fixture.db);
    assert!(engine.search("cd_fgh").unwrap().is_empty());
}

#[test]
fn test_bare_percent_matches_everything() {
    let fixture = DbFixture::new().unwrap();
    fixture.add("CABLE", None).unwrap();
    fixture.add("LADDER", None).unwrap();

    let engine = SearchEngine::new(&fixture.db);
    let results = engine.search("%").unwrap();

    let ids: HashSet<i64> = results.iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_deleted_orders_remain_searchable() {
    let fixture = DbFixture::new().unwrap();
    let id = fixture.add("PERFORATED", None).unwrap();
    fixture.db.soft_delete(id).unwrap();

    let engine = SearchEngine::new(&fixture.db);
    let results = engine.search("PERFORATED").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), id);
}

#[test]
fn test_store_failure_surfaces_as_unavailable() {
    let store = MemoryStore::failing();
    let engine = SearchEngine::new(&store);

    let err = engine.search("cable").unwrap_err();
    assert!(matches!(err, TrackError::SearchUnavailable));
    assert_eq!(err.to_string(), "search failed");
}
