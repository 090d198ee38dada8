//! Shared test utilities and fixtures.

#![allow(dead_code)]

use paperhub::{Catalog, ExamType, JobKind, JobRecord, PaperRecord};

// Re-export canonical test utilities from paperhub::testing
pub use paperhub::testing::{make_job, make_paper, sample_jobs, sample_papers};

/// Faculties used by generated papers, in mixed case on purpose.
pub const FACULTIES: &[&str] = &["Engineering", "science", "MANAGEMENT", "Medicine", "Humanities"];

/// Semester texts, including ones with no digits.
pub const SEMESTERS: &[&str] = &[
    "1st Sem",
    "2nd Sem",
    "3rd Sem",
    "8th Sem",
    "10th Sem",
    "Final Year",
    "",
];

/// Papers whose subject contains `needle` (case-insensitive), by hand.
pub fn subjects_containing(papers: &[PaperRecord], needle: &str) -> Vec<String> {
    let needle = needle.to_lowercase();
    papers
        .iter()
        .filter(|p| {
            p.subject.to_lowercase().contains(&needle) || p.faculty.to_lowercase().contains(&needle)
        })
        .map(|p| p.subject.clone())
        .collect()
}

/// Subjects of a result list, for readable assertions.
pub fn subjects(results: &[&PaperRecord]) -> Vec<String> {
    results.iter().map(|p| p.subject.clone()).collect()
}

/// Companies of a result list, for readable assertions.
pub fn companies(results: &[&JobRecord]) -> Vec<String> {
    results.iter().map(|j| j.company.clone()).collect()
}

/// An internal-exam paper, the sitting `make_paper` never produces.
pub fn make_internal_paper(subject: &str, faculty: &str) -> PaperRecord {
    PaperRecord {
        subject: subject.to_string(),
        year: 2022,
        semester: "6th Sem".to_string(),
        exam_type: ExamType::Internal,
        faculty: faculty.to_string(),
    }
}

pub fn unpaid(mut job: JobRecord) -> JobRecord {
    job.is_paid = false;
    job
}

pub fn sample_catalog() -> Catalog {
    Catalog::sample()
}

pub fn internship(company: &str, location: &str) -> JobRecord {
    make_job(company, "Intern", location, JobKind::Internship)
}
