// tests/pipeline.rs
//
// The cascade pipeline against small inline collections: distinctness,
// ordering, prefix filtering, flattening, and the selection state machine.
//
use jobdex::pipeline::{Selection, DATE_POSTED, INDUSTRIES, REGIONS};
use jobdex::record::Record;

fn rec(v: serde_json::Value) -> Record {
    serde_json::from_value(v).unwrap()
}

fn regions_fixture() -> Vec<Record> {
    vec![
        rec(serde_json::json!({
            "State": "CA", "City_Town_Other": "SF", "Scale": "Large", "Type": "Retail",
            "Employers": [
                { "EmployerName": "Zed", "EmployerCareers": "zed.example/careers" },
                { "EmployerName": "Acme", "EmployerContact": "acme.example" }
            ]
        })),
        rec(serde_json::json!({
            "State": "NY", "City_Town_Other": "NYC", "Scale": "Small", "Type": "Food",
            "Employers": [ { "EmployerName": "Bodega Co" } ]
        })),
        // Duplicate facet values on purpose: CA appears twice.
        rec(serde_json::json!({
            "State": "CA", "City_Town_Other": "LA", "Scale": "Large", "Type": "Retail",
            "Employers": []
        })),
    ]
}

fn industries_fixture() -> Vec<Record> {
    vec![
        rec(serde_json::json!({
            "Industry": "Tech", "Subindustry": "Software", "Scale": "Large", "Type": "Remote",
            "EmployerName": "Acme", "EmployerLink": "acme.example/jobs"
        })),
        rec(serde_json::json!({
            "Industry": "Tech", "Subindustry": "Software", "Scale": "Large", "Type": "Remote",
            "EmployerName": "Zed"
        })),
        rec(serde_json::json!({
            "Industry": "Tech", "Subindustry": "Hardware", "Scale": "Small", "Type": "Onsite",
            "EmployerName": "Widgets Inc"
        })),
        // No EmployerName: must never reach a result set.
        rec(serde_json::json!({
            "Industry": "Tech", "Subindustry": "Software", "Scale": "Large", "Type": "Remote"
        })),
    ]
}

#[test]
fn stage_options_are_distinct_and_sorted() {
    let records = regions_fixture();
    let sel = Selection::for_chain(&REGIONS);

    let states = REGIONS.options(&records, &sel, 0);
    assert_eq!(states, vec!["CA", "NY"]); // two CA records, one option
}

#[test]
fn options_follow_the_bound_prefix() {
    let records = regions_fixture();
    let mut sel = Selection::for_chain(&REGIONS);

    sel.set(0, Some("CA".into()));
    let cities = REGIONS.options(&records, &sel, 1);
    assert_eq!(cities, vec!["LA", "SF"]);

    sel.set(1, Some("SF".into()));
    assert_eq!(REGIONS.options(&records, &sel, 2), vec!["Large"]);
    sel.set(2, Some("Large".into()));
    assert_eq!(REGIONS.options(&records, &sel, 3), vec!["Retail"]);
}

#[test]
fn non_matching_prefix_yields_empty_options() {
    let records = regions_fixture();
    let mut sel = Selection::for_chain(&REGIONS);
    sel.set(0, Some("TX".into()));

    assert!(REGIONS.options(&records, &sel, 1).is_empty());
}

#[test]
fn unbound_prefix_yields_empty_options() {
    let records = regions_fixture();
    let sel = Selection::for_chain(&REGIONS);

    // Stage 2 without stages 0 and 1 bound has nothing to derive from.
    assert!(REGIONS.options(&records, &sel, 2).is_empty());
}

#[test]
fn flattened_results_are_sorted_by_name() {
    let records = regions_fixture();
    let mut sel = Selection::for_chain(&REGIONS);
    sel.set(0, Some("CA".into()));
    sel.set(1, Some("SF".into()));
    sel.set(2, Some("Large".into()));
    sel.set(3, Some("Retail".into()));

    let listings = REGIONS.results(&records, &sel).unwrap();
    let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Acme", "Zed"]); // dataset order was Zed, Acme
    assert_eq!(listings[0].contact.as_deref(), Some("acme.example"));
}

#[test]
fn results_satisfy_every_bound_facet() {
    let records = industries_fixture();
    let mut sel = Selection::for_chain(&INDUSTRIES);
    sel.set(0, Some("Tech".into()));
    sel.set(1, Some("Software".into()));
    sel.set(2, Some("Large".into()));
    sel.set(3, Some("Remote".into()));

    let listings = INDUSTRIES.results(&records, &sel).unwrap();
    assert_eq!(listings.len(), 2); // nameless record dropped

    for l in &listings {
        let source = records.iter().find(|r| r.name.as_deref() == Some(&l.name)).unwrap();
        assert_eq!(source.facet("Industry"), Some("Tech"));
        assert_eq!(source.facet("Subindustry"), Some("Software"));
        assert_eq!(source.facet("Scale"), Some("Large"));
        assert_eq!(source.facet("Type"), Some("Remote"));
    }
}

#[test]
fn results_require_a_complete_selection() {
    let records = industries_fixture();
    let mut sel = Selection::for_chain(&INDUSTRIES);
    sel.set(0, Some("Tech".into()));

    assert!(INDUSTRIES.results(&records, &sel).is_err());
}

#[test]
fn empty_result_set_is_not_an_error() {
    let records = industries_fixture();
    let mut sel = Selection::for_chain(&INDUSTRIES);
    sel.set(0, Some("Tech".into()));
    sel.set(1, Some("Hardware".into()));
    sel.set(2, Some("Small".into()));
    sel.set(3, Some("Onsite".into()));

    // Matches one record; now flip scale so nothing matches.
    sel.set(2, Some("Large".into()));
    sel.set(3, Some("Onsite".into()));
    let listings = INDUSTRIES.results(&records, &sel).unwrap();
    assert!(listings.is_empty());
}

#[test]
fn setting_an_upstream_slot_clears_everything_deeper() {
    let mut sel = Selection::for_chain(&REGIONS);
    sel.set(0, Some("CA".into()));
    sel.set(1, Some("SF".into()));
    sel.set(2, Some("Large".into()));
    sel.set(3, Some("Retail".into()));
    assert!(sel.is_complete());

    sel.set(1, Some("LA".into()));
    assert_eq!(sel.bound(), 2);
    assert_eq!(sel.get(2), None);
    assert_eq!(sel.get(3), None);

    // Clearing works the same way.
    sel.set(0, None);
    assert_eq!(sel.bound(), 0);
    assert_eq!(sel.get(1), None);
}

#[test]
fn pipeline_is_idempotent() {
    let records = regions_fixture();
    let mut sel = Selection::for_chain(&REGIONS);
    sel.set(0, Some("CA".into()));
    sel.set(1, Some("SF".into()));
    sel.set(2, Some("Large".into()));
    sel.set(3, Some("Retail".into()));

    assert_eq!(
        REGIONS.options(&records, &sel, 3),
        REGIONS.options(&records, &sel, 3)
    );
    assert_eq!(
        REGIONS.results(&records, &sel).unwrap(),
        REGIONS.results(&records, &sel).unwrap()
    );
}

#[test]
fn fixed_date_options_keep_declared_order() {
    // Lexicographic order would put "Last 14 Days" first; the fixed list
    // must come through verbatim.
    let sel = Selection::for_chain(&DATE_POSTED);
    let options = DATE_POSTED.options(&[], &sel, 0);
    assert_eq!(options, vec!["Last 3 Days", "Last 7 Days", "Last 14 Days"]);
}

#[test]
fn records_missing_a_facet_drop_out_silently() {
    let records = vec![
        rec(serde_json::json!({
            "DatePosted": "Last 3 Days", "Scale": "Large", "Type": "Remote",
            "EmployerName": "Acme"
        })),
        // No Scale field at all.
        rec(serde_json::json!({
            "DatePosted": "Last 3 Days", "Type": "Remote",
            "EmployerName": "Ghost Co"
        })),
    ];

    let mut sel = Selection::for_chain(&DATE_POSTED);
    sel.set(0, Some("Last 3 Days".into()));
    assert_eq!(DATE_POSTED.options(&records, &sel, 1), vec!["Large"]);

    sel.set(1, Some("Large".into()));
    sel.set(2, Some("Remote".into()));
    let names: Vec<String> = DATE_POSTED
        .results(&records, &sel)
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["Acme"]);
}
