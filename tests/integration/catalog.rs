//! Loading catalogs from JSON files and filtering them.

use super::common::{sample_catalog, subjects};
use paperhub::facet::{SEMESTER, TYPE};
use paperhub::{filter, Catalog, CatalogError, FacetSelection, JobKind};
use std::fs;
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"{
  "papers": [
    { "subject": "Thesis Seminar", "year": 2024, "semester": "Final Year",
      "examType": "Internal", "faculty": "Engineering" },
    { "subject": "Compiler Design", "year": 2024, "semester": "6th Sem",
      "examType": "Final", "faculty": "Engineering" },
    { "subject": "Advanced Compilers", "year": 2023, "semester": "2nd Sem",
      "examType": "Final", "faculty": "Engineering" }
  ],
  "jobs": [
    { "company": "Leapfrog Technology", "role": "Software Engineer",
      "location": "Lalitpur", "deadline": "Jan 20, 2025", "type": "job" }
  ]
}"#;

fn write_catalog(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, contents).expect("Failed to write catalog");
    (dir, path)
}

#[test]
fn test_load_and_filter_file_catalog() {
    let (_dir, path) = write_catalog(CATALOG_JSON);
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.papers.len(), 3);
    assert_eq!(catalog.jobs.len(), 1);
    assert!(catalog.jobs[0].is_paid);
    assert_eq!(catalog.jobs[0].kind, JobKind::Job);

    let results = filter(&catalog.papers, &FacetSelection::new(), "compiler");
    assert_eq!(subjects(&results), vec!["Compiler Design", "Advanced Compilers"]);

    let semester = FacetSelection::new().with(SEMESTER, ["6", "2"]);
    let results = filter(&catalog.papers, &semester, "");
    assert_eq!(subjects(&results), vec!["Compiler Design", "Advanced Compilers"]);
}

#[test]
fn test_file_order_is_result_order() {
    let (_dir, path) = write_catalog(CATALOG_JSON);
    let catalog = Catalog::load(&path).unwrap();
    let all = filter(&catalog.papers, &FacetSelection::new(), "");
    assert_eq!(
        subjects(&all),
        vec!["Thesis Seminar", "Compiler Design", "Advanced Compilers"]
    );
}

#[test]
fn test_malformed_catalog_is_a_parse_error() {
    let (_dir, path) = write_catalog(r#"{"papers": [{"subject": "Missing fields"}]}"#);
    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "got {:?}", err);
}

#[test]
fn test_missing_catalog_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_sample_catalog_serializes_and_reloads() {
    let catalog = sample_catalog();
    let json = serde_json::to_string(&catalog).unwrap();
    let (_dir, path) = write_catalog(&json);
    assert_eq!(Catalog::load(&path).unwrap(), catalog);
}

#[test]
fn test_sample_jobs_split_by_type() {
    let catalog = sample_catalog();
    let internships = filter(&catalog.jobs, &FacetSelection::new().with(TYPE, ["internship"]), "");
    let jobs = filter(&catalog.jobs, &FacetSelection::new().with(TYPE, ["job"]), "");
    assert_eq!(internships.len() + jobs.len(), catalog.jobs.len());
    assert_eq!(internships.len(), 5);
}
