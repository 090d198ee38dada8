//! End-to-end filter scenarios on the sample listings.

use super::common::{companies, sample_jobs, sample_papers, subjects};
use paperhub::facet::{FACULTY, PAID, SEMESTER, TYPE, YEAR};
use paperhub::{filter, FacetSelection, SearchState};

#[test]
fn test_query_matches_subject_case_insensitively() {
    let papers = sample_papers();
    let results = filter(&papers, &FacetSelection::new(), "data");
    assert_eq!(
        subjects(&results),
        vec!["Data Structures & Algorithms", "Database Management System"]
    );
}

#[test]
fn test_query_matches_faculty_too() {
    let papers = sample_papers();
    let results = filter(&papers, &FacetSelection::new(), "MEDICINE");
    assert_eq!(subjects(&results), vec!["Human Anatomy", "Pharmacology"]);
}

#[test]
fn test_faculty_facet_keeps_engineering_in_source_order() {
    let papers = sample_papers();
    let selection = FacetSelection::new().with(FACULTY, ["engineering"]);
    let results = filter(&papers, &selection, "");
    assert_eq!(
        subjects(&results),
        vec![
            "Data Structures & Algorithms",
            "Computer Networks",
            "Database Management System",
            "Object Oriented Programming",
            "Engineering Mathematics II",
            "Applied Mechanics",
        ]
    );
}

#[test]
fn test_several_values_in_one_group_are_alternatives() {
    let papers = sample_papers();
    let selection = FacetSelection::new().with(FACULTY, ["science", "medicine"]);
    let results = filter(&papers, &selection, "");
    assert_eq!(
        subjects(&results),
        vec!["Organic Chemistry", "Cell Biology", "Human Anatomy", "Pharmacology"]
    );
}

#[test]
fn test_groups_combine_with_and() {
    let papers = sample_papers();
    let selection = FacetSelection::new()
        .with(FACULTY, ["engineering"])
        .with(YEAR, ["2023"]);
    let results = filter(&papers, &selection, "");
    assert_eq!(subjects(&results), vec!["Object Oriented Programming"]);

    // Pharmacology is 2023 but Medicine, so it fails the Faculty group
    assert!(!results.iter().any(|p| p.subject == "Pharmacology"));
}

#[test]
fn test_semester_facet_uses_leading_number() {
    let papers = sample_papers();
    let selection = FacetSelection::new().with(SEMESTER, ["3"]);
    let results = filter(&papers, &selection, "");
    assert_eq!(
        subjects(&results),
        vec![
            "Data Structures & Algorithms",
            "Object Oriented Programming",
            "Pharmacology"
        ]
    );
}

#[test]
fn test_query_and_facets_together() {
    let papers = sample_papers();
    let selection = FacetSelection::new()
        .with(YEAR, ["2024"])
        .with(SEMESTER, ["1", "2"]);
    let results = filter(&papers, &selection, "engineering");
    assert_eq!(
        subjects(&results),
        vec!["Engineering Mathematics II", "Applied Mechanics"]
    );
}

#[test]
fn test_job_query_matches_location() {
    let jobs = sample_jobs();
    let results = filter(&jobs, &FacetSelection::new(), "kathmandu");
    assert_eq!(
        companies(&results),
        vec!["Fusemachines", "Deerwalk Institute", "Yomari Info", "Verisk Nepal"]
    );
}

// "F1Soft International" matches on company as well as role
#[test]
fn test_job_query_matches_role() {
    let jobs = sample_jobs();
    let results = filter(&jobs, &FacetSelection::new(), "intern");
    assert_eq!(
        companies(&results),
        vec![
            "Fusemachines",
            "CloudFactory",
            "F1Soft International",
            "Verisk Nepal",
        ]
    );
}

#[test]
fn test_job_type_tab() {
    let jobs = sample_jobs();
    let selection = FacetSelection::new().with(TYPE, ["job"]);
    let results = filter(&jobs, &selection, "");
    assert_eq!(
        companies(&results),
        vec!["Leapfrog Technology", "Yomari Info", "Cotiviti Nepal"]
    );
}

#[test]
fn test_unpaid_internships() {
    let jobs = sample_jobs();
    let selection = FacetSelection::new()
        .with(TYPE, ["internship"])
        .with(PAID, ["unpaid"]);
    assert_eq!(companies(&filter(&jobs, &selection, "")), vec!["Deerwalk Institute"]);
}

#[test]
fn test_search_state_follows_sidebar_toggles() {
    let papers = sample_papers();
    let mut state = SearchState::new();

    state.toggle(FACULTY, "management");
    assert_eq!(state.apply(&papers).len(), 2);

    state.toggle(FACULTY, "science");
    assert_eq!(state.apply(&papers).len(), 4);

    state.set_query("accounting");
    assert_eq!(subjects(&state.apply(&papers)), vec!["Financial Accounting"]);

    state.toggle(FACULTY, "management");
    assert!(state.apply(&papers).is_empty());
}
