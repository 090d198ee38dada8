// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the filter engine.
//!
//! Arbitrary records, selections, and queries: the engine must never panic
//! and must always return an ordered subset of its input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use paperhub::{filter_positions, ExamType, FacetSelection, PaperRecord};

#[derive(Arbitrary, Debug)]
struct FuzzPaper {
    subject: String,
    year: u16,
    semester: String,
    internal: bool,
    faculty: String,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    papers: Vec<FuzzPaper>,
    selection: Vec<(String, String)>,
    query: String,
}

fuzz_target!(|input: FuzzInput| {
    let papers: Vec<PaperRecord> = input
        .papers
        .into_iter()
        .take(64)
        .map(|p| PaperRecord {
            subject: p.subject,
            year: p.year,
            semester: p.semester,
            exam_type: if p.internal { ExamType::Internal } else { ExamType::Final },
            faculty: p.faculty,
        })
        .collect();
    let selection: FacetSelection = input.selection.into_iter().take(16).collect();

    let positions = filter_positions(&papers, &selection, &input.query);

    assert!(positions.len() <= papers.len());
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(positions.iter().all(|&p| p < papers.len()));

    // An empty query with no constraints keeps everything
    if input.query.is_empty() && selection.is_unconstrained() {
        assert_eq!(positions.len(), papers.len());
    }
});
