//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::{ExamType, JobKind, JobRecord, PaperRecord};

/// A final-exam paper.
pub fn make_paper(subject: &str, year: u16, semester: &str, faculty: &str) -> PaperRecord {
    PaperRecord {
        subject: subject.to_string(),
        year,
        semester: semester.to_string(),
        exam_type: ExamType::Final,
        faculty: faculty.to_string(),
    }
}

/// A paid listing with a fixed deadline.
pub fn make_job(company: &str, role: &str, location: &str, kind: JobKind) -> JobRecord {
    JobRecord {
        company: company.to_string(),
        role: role.to_string(),
        location: location.to_string(),
        deadline: "Jan 31, 2025".to_string(),
        kind,
        is_paid: true,
    }
}

/// The twelve sample papers, in catalog order.
pub fn sample_papers() -> Vec<PaperRecord> {
    Catalog::sample().papers
}

/// The eight sample jobs, in catalog order.
pub fn sample_jobs() -> Vec<JobRecord> {
    Catalog::sample().jobs
}
