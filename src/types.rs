// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the search engine.
//!
//! Two record shapes exist: exam papers and job listings. Both are plain
//! data with every field either required or explicitly optional, so any
//! ambiguity in upstream data is rejected by serde at the boundary instead
//! of being discovered inside the filter.
//!
//! # Wire format
//!
//! Field names are camelCase on the wire to match the catalog JSON:
//!
//! | Rust field          | JSON key    | Notes                              |
//! |---------------------|-------------|------------------------------------|
//! | `PaperRecord::exam_type` | `examType` | `"Final"` or `"Internal"`       |
//! | `JobRecord::kind`   | `type`      | `"internship"` or `"job"`          |
//! | `JobRecord::is_paid`| `isPaid`    | optional, defaults to `true`       |

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PAPERS
// =============================================================================

/// Sitting an exam paper was set for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamType {
    Final,
    Internal,
}

impl ExamType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExamType::Final => "Final",
            ExamType::Internal => "Internal",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A past exam paper listing.
///
/// `semester` is display text such as `"3rd Sem"`; the Semester facet only
/// looks at its first run of digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    pub subject: String,
    pub year: u16,
    pub semester: String,
    pub exam_type: ExamType,
    pub faculty: String,
}

// =============================================================================
// JOBS
// =============================================================================

/// Whether a listing is an internship or a regular position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Internship,
    Job,
}

impl JobKind {
    /// Facet value for this kind (`"internship"` / `"job"`).
    pub fn as_str(self) -> &'static str {
        match self {
            JobKind::Internship => "internship",
            JobKind::Job => "job",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_paid() -> bool {
    true
}

/// An internship or job opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub company: String,
    pub role: String,
    pub location: String,
    /// Display-formatted date, e.g. `"Jan 15, 2025"`. Never parsed.
    pub deadline: String,
    #[serde(rename = "type")]
    pub kind: JobKind,
    #[serde(default = "default_paid")]
    pub is_paid: bool,
}

impl JobRecord {
    /// Facet value for the Paid group.
    pub fn pay_label(&self) -> &'static str {
        if self.is_paid {
            "paid"
        } else {
            "unpaid"
        }
    }
}

// =============================================================================
// TAGGED RECORD
// =============================================================================

/// Either record kind, for collections that mix both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Paper(PaperRecord),
    Job(JobRecord),
}

impl From<PaperRecord> for Record {
    fn from(paper: PaperRecord) -> Self {
        Record::Paper(paper)
    }
}

impl From<JobRecord> for Record {
    fn from(job: JobRecord) -> Self {
        Record::Job(job)
    }
}
