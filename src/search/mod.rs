// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Faceted search: the listing views' filter engine.
//!
//! Given records, a [`FacetSelection`], and a free-text query, return the
//! records that satisfy all of them, in source order. That is the whole job.
//! The engine is a pure function: no state, no I/O, nothing that can fail.
//!
//! # Matching
//!
//! A record is kept iff
//!
//! 1. the query is empty, or it is a case-insensitive substring of one of
//!    the record's searchable fields, and
//! 2. for every group with a non-empty selection, the record's value for
//!    that group (normalized per [`FacetField`]) is one of the selected values.
//!
//! Groups the record kind doesn't recognize are ignored. A recognized group
//! whose field is missing on the record fails.
//!
//! # Example
//!
//! ```
//! use paperhub::{filter, Catalog, FacetSelection};
//! use paperhub::facet::FACULTY;
//!
//! let catalog = Catalog::sample();
//! let selection = FacetSelection::new().with(FACULTY, ["medicine"]);
//! let results = filter(&catalog.papers, &selection, "");
//! assert!(results.iter().all(|p| p.faculty == "Medicine"));
//! ```

mod compiled;
mod query;
mod records;
mod state;

pub use compiled::CompiledFilter;
pub use query::TextQuery;
pub use state::SearchState;

use crate::facet::FacetSelection;
use crate::verify::contracts::check_positions_subset;

/// A record's value for one facet group, tagged with how to compare it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetField<'a> {
    /// Case-insensitive equality against the selected values.
    Text(&'a str),
    /// Decimal rendering compared against the selected values.
    Number(i64),
    /// First run of ASCII digits in the text; no digits never matches.
    NumericPrefix(&'a str),
    /// The group applies to this record kind but the field is missing.
    Absent,
}

/// Something the engine can filter.
///
/// Implementors list the fields the free-text query searches, and map facet
/// group names to field values. Returning `None` from [`Filterable::facet`]
/// means "this group doesn't apply to me", which makes it inert.
pub trait Filterable {
    fn searchable_fields(&self) -> impl Iterator<Item = &str>;

    fn facet(&self, group: &str) -> Option<FacetField<'_>>;
}

/// Filter `records` by `selection` and `query`, preserving order.
///
/// `query` is used as given: surrounding whitespace is part of the needle.
/// Never fails and never mutates its inputs.
pub fn filter<'a, R: Filterable>(
    records: &'a [R],
    selection: &FacetSelection,
    query: &str,
) -> Vec<&'a R> {
    filter_positions(records, selection, query)
        .into_iter()
        .map(|position| &records[position])
        .collect()
}

/// Like [`filter`], but returns indices into `records` (strictly increasing).
pub fn filter_positions<R: Filterable>(
    records: &[R],
    selection: &FacetSelection,
    query: &str,
) -> Vec<usize> {
    let compiled = CompiledFilter::new(selection, query);
    let positions: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| compiled.matches(*record))
        .map(|(position, _)| position)
        .collect();

    check_positions_subset(&positions, records.len());
    tracing::trace!(
        input = records.len(),
        output = positions.len(),
        active_groups = compiled.active_group_count(),
        "filtered records"
    );
    positions
}

/// Single-record form of [`filter`].
pub fn matches<R: Filterable>(record: &R, selection: &FacetSelection, query: &str) -> bool {
    CompiledFilter::new(selection, query).matches(record)
}

/// Parallel [`filter`]. Same output, same order; worth it only for large
/// collections.
#[cfg(feature = "parallel")]
pub fn filter_parallel<'a, R: Filterable + Sync>(
    records: &'a [R],
    selection: &FacetSelection,
    query: &str,
) -> Vec<&'a R> {
    use rayon::prelude::*;

    let compiled = CompiledFilter::new(selection, query);
    let results: Vec<&'a R> = records
        .par_iter()
        .filter(|record| compiled.matches(*record))
        .collect();

    tracing::trace!(
        input = records.len(),
        output = results.len(),
        "filtered records in parallel"
    );
    results
}
