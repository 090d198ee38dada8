// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! How each record kind exposes itself to the engine.
//!
//! | Kind   | Searchable fields         | Facets                                   |
//! |--------|---------------------------|------------------------------------------|
//! | Paper  | subject, faculty          | Faculty, Year, Semester                  |
//!
//! The sidebar also offers a Program group for papers; papers carry no
//! program, so that group is inert like any other unknown one.
//! | Job    | company, role, location   | Type, Paid                               |

use super::{FacetField, Filterable};
use crate::facet::{FACULTY, PAID, SEMESTER, TYPE, YEAR};
use crate::types::{JobRecord, PaperRecord, Record};

impl Filterable for PaperRecord {
    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [self.subject.as_str(), self.faculty.as_str()].into_iter()
    }

    fn facet(&self, group: &str) -> Option<FacetField<'_>> {
        match group {
            FACULTY => Some(FacetField::Text(&self.faculty)),
            YEAR => Some(FacetField::Number(i64::from(self.year))),
            SEMESTER => Some(FacetField::NumericPrefix(&self.semester)),
            _ => None,
        }
    }
}

impl Filterable for JobRecord {
    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.company.as_str(),
            self.role.as_str(),
            self.location.as_str(),
        ]
        .into_iter()
    }

    fn facet(&self, group: &str) -> Option<FacetField<'_>> {
        match group {
            TYPE => Some(FacetField::Text(self.kind.as_str())),
            PAID => Some(FacetField::Text(self.pay_label())),
            _ => None,
        }
    }
}

impl Filterable for Record {
    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        let fields: Vec<&str> = match self {
            Record::Paper(paper) => paper.searchable_fields().collect(),
            Record::Job(job) => job.searchable_fields().collect(),
        };
        fields.into_iter()
    }

    fn facet(&self, group: &str) -> Option<FacetField<'_>> {
        match self {
            Record::Paper(paper) => paper.facet(group),
            Record::Job(job) => job.facet(group),
        }
    }
}
