// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! The facet groups each listing view offers.

use super::{FACULTY, PAID, PROGRAM, SEMESTER, TYPE, YEAR};
use serde::Serialize;

/// One tickable option: a display label and the value stored in the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
}

/// A named facet dimension with its options, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetGroup {
    pub title: String,
    pub options: Vec<FacetOption>,
}

impl FacetGroup {
    fn new(title: &str, options: &[(&str, &str)]) -> Self {
        Self {
            title: title.to_string(),
            options: options
                .iter()
                .map(|(label, value)| FacetOption {
                    label: (*label).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
        }
    }

    /// Look up the display label for `value`.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

/// Sidebar groups for the papers view.
pub fn paper_facet_groups() -> Vec<FacetGroup> {
    vec![
        FacetGroup::new(
            FACULTY,
            &[
                ("Engineering", "engineering"),
                ("Science", "science"),
                ("Management", "management"),
                ("Humanities", "humanities"),
                ("Medicine", "medicine"),
            ],
        ),
        FacetGroup::new(
            PROGRAM,
            &[("Bachelor's", "bachelors"), ("Master's", "masters"), ("PhD", "phd")],
        ),
        FacetGroup::new(
            SEMESTER,
            &[
                ("1st Semester", "1"),
                ("2nd Semester", "2"),
                ("3rd Semester", "3"),
                ("4th Semester", "4"),
                ("5th Semester", "5"),
                ("6th Semester", "6"),
                ("7th Semester", "7"),
                ("8th Semester", "8"),
            ],
        ),
        FacetGroup::new(
            YEAR,
            &[
                ("2024", "2024"),
                ("2023", "2023"),
                ("2022", "2022"),
                ("2021", "2021"),
                ("2020", "2020"),
                ("2019", "2019"),
                ("2018", "2018"),
            ],
        ),
    ]
}

/// Groups for the jobs view. An empty Type selection is the "All" tab.
pub fn job_facet_groups() -> Vec<FacetGroup> {
    vec![
        FacetGroup::new(TYPE, &[("Internships", "internship"), ("Jobs", "job")]),
        FacetGroup::new(PAID, &[("Paid", "paid"), ("Unpaid", "unpaid")]),
    ]
}
