// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Demo listings shipped with the binary.

use crate::types::{ExamType, JobKind, JobRecord, PaperRecord};

fn paper(
    subject: &str,
    year: u16,
    semester: &str,
    exam_type: ExamType,
    faculty: &str,
) -> PaperRecord {
    PaperRecord {
        subject: subject.to_string(),
        year,
        semester: semester.to_string(),
        exam_type,
        faculty: faculty.to_string(),
    }
}

fn job(
    company: &str,
    role: &str,
    location: &str,
    deadline: &str,
    kind: JobKind,
    is_paid: bool,
) -> JobRecord {
    JobRecord {
        company: company.to_string(),
        role: role.to_string(),
        location: location.to_string(),
        deadline: deadline.to_string(),
        kind,
        is_paid,
    }
}

pub(super) fn papers() -> Vec<PaperRecord> {
    use ExamType::{Final, Internal};

    vec![
        paper("Data Structures & Algorithms", 2024, "3rd Sem", Final, "Engineering"),
        paper("Computer Networks", 2024, "5th Sem", Final, "Engineering"),
        paper("Database Management System", 2024, "4th Sem", Internal, "Engineering"),
        paper("Object Oriented Programming", 2023, "3rd Sem", Final, "Engineering"),
        paper("Microeconomics", 2024, "2nd Sem", Final, "Management"),
        paper("Financial Accounting", 2024, "1st Sem", Final, "Management"),
        paper("Organic Chemistry", 2023, "4th Sem", Internal, "Science"),
        paper("Cell Biology", 2024, "2nd Sem", Final, "Science"),
        paper("Human Anatomy", 2024, "1st Sem", Final, "Medicine"),
        paper("Pharmacology", 2023, "3rd Sem", Final, "Medicine"),
        paper("Engineering Mathematics II", 2024, "2nd Sem", Final, "Engineering"),
        paper("Applied Mechanics", 2024, "1st Sem", Final, "Engineering"),
    ]
}

pub(super) fn jobs() -> Vec<JobRecord> {
    use JobKind::{Internship, Job};

    vec![
        job(
            "Fusemachines",
            "Machine Learning Intern",
            "Kathmandu",
            "Jan 15, 2025",
            Internship,
            true,
        ),
        job("Leapfrog Technology", "Software Engineer", "Lalitpur", "Jan 20, 2025", Job, true),
        job("CloudFactory", "Data Analyst Intern", "Remote", "Jan 12, 2025", Internship, true),
        job(
            "Deerwalk Institute",
            "Teaching Assistant",
            "Kathmandu",
            "Jan 18, 2025",
            Internship,
            false,
        ),
        job("Yomari Info", "Frontend Developer", "Kathmandu", "Jan 25, 2025", Job, true),
        job(
            "F1Soft International",
            "QA Engineer Intern",
            "Lalitpur",
            "Jan 22, 2025",
            Internship,
            true,
        ),
        job("Cotiviti Nepal", "Associate Software Engineer", "Lalitpur", "Jan 30, 2025", Job, true),
        job("Verisk Nepal", "Data Science Intern", "Kathmandu", "Jan 28, 2025", Internship, true),
    ]
}
