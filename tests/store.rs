// tests/store.rs
//
// Local dataset loading: shard merge order, whole-load failure on a
// missing or malformed source.
//
use std::fs;

use jobdex::config::options::DomainKind;
use jobdex::error::Error;
use jobdex::store;

#[test]
fn source_lists_match_the_site_layout() {
    let regions = store::source_files(DomainKind::Regions);
    assert_eq!(regions.len(), 10);
    assert_eq!(regions[0], "regionsdata_1.json");
    assert_eq!(regions[9], "regionsdata_10.json");

    assert_eq!(store::source_files(DomainKind::Industries), vec!["industriesdata.json"]);
    assert_eq!(store::source_files(DomainKind::DatePosted), vec!["datepostedata.json"]);
}

#[test]
fn shards_merge_in_source_order_without_dedup() {
    let dir = tempfile::tempdir().unwrap();

    // One record per shard, named after its shard so order is observable.
    for (i, name) in store::source_files(DomainKind::Regions).iter().enumerate() {
        let body = format!(
            r#"[{{ "State": "S{}", "City_Town_Other": "X", "Employers": [] }}]"#,
            i + 1
        );
        fs::write(dir.path().join(name), body).unwrap();
    }
    // Duplicate the first shard's record in the last file too.
    fs::write(
        dir.path().join("regionsdata_10.json"),
        r#"[{ "State": "S10", "City_Town_Other": "X", "Employers": [] },
            { "State": "S1", "City_Town_Other": "X", "Employers": [] }]"#,
    )
    .unwrap();

    let records = store::load(DomainKind::Regions, dir.path()).unwrap();
    assert_eq!(records.len(), 11);
    assert_eq!(records[0].facet("State"), Some("S1"));
    assert_eq!(records[9].facet("State"), Some("S10"));
    assert_eq!(records[10].facet("State"), Some("S1")); // kept, no dedup
}

#[test]
fn a_missing_shard_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();

    for name in store::source_files(DomainKind::Regions).iter().take(9) {
        fs::write(dir.path().join(name), "[]").unwrap();
    }
    // regionsdata_10.json never written.

    let err = store::load(DomainKind::Regions, dir.path()).unwrap_err();
    match err {
        Error::Load { source_name, .. } => assert_eq!(source_name, "regionsdata_10.json"),
        other => panic!("expected Load error, got {other:?}"),
    }
}

#[test]
fn malformed_json_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("industriesdata.json"), "{ not json").unwrap();

    let err = store::load(DomainKind::Industries, dir.path()).unwrap_err();
    assert!(matches!(err, Error::Load { .. }));
}

#[test]
fn empty_sources_load_as_an_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("datepostedata.json"), "[]").unwrap();

    let records = store::load(DomainKind::DatePosted, dir.path()).unwrap();
    assert!(records.is_empty());
}
