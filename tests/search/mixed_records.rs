//! Filtering a collection that mixes papers and jobs.

use super::common::{internship, make_paper};
use paperhub::facet::{FACULTY, TYPE};
use paperhub::{filter, FacetSelection, Record};

fn mixed() -> Vec<Record> {
    vec![
        make_paper("Cell Biology", 2024, "2nd Sem", "Science").into(),
        internship("Fusemachines", "Kathmandu").into(),
        make_paper("Human Anatomy", 2024, "1st Sem", "Medicine").into(),
        internship("CloudFactory", "Remote").into(),
    ]
}

#[test]
fn test_query_spans_both_kinds() {
    let records = mixed();
    let results = filter(&records, &FacetSelection::new(), "e");
    assert_eq!(results.len(), 4);
}

#[test]
fn test_facets_only_constrain_the_kind_they_apply_to() {
    let records = mixed();
    let selection = FacetSelection::new().with(FACULTY, ["science"]);
    let results = filter(&records, &selection, "");

    // Cell Biology passes; jobs ignore Faculty; Human Anatomy fails
    assert_eq!(results.len(), 3);
    assert!(!results
        .iter()
        .any(|r| matches!(r, Record::Paper(p) if p.subject == "Human Anatomy")));
}

#[test]
fn test_type_facet_keeps_papers() {
    let records = mixed();
    let selection = FacetSelection::new().with(TYPE, ["job"]);
    let results = filter(&records, &selection, "");
    assert!(results.iter().all(|r| matches!(r, Record::Paper(_))));
    assert_eq!(results.len(), 2);
}
