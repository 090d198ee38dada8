// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Facet selections: what the user has ticked in the filter sidebar.
//!
//! A selection maps a group name ("Faculty", "Year", ...) to the set of
//! option values chosen in that group. Missing groups and empty groups are
//! indistinguishable to the engine: both mean "no constraint".
//!
//! The selection is owned by the caller. The engine only ever reads it, and
//! the toggle/clear operations here are the only way it changes.

mod groups;

pub use groups::{job_facet_groups, paper_facet_groups, FacetGroup, FacetOption};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const FACULTY: &str = "Faculty";
pub const PROGRAM: &str = "Program";
pub const SEMESTER: &str = "Semester";
pub const YEAR: &str = "Year";
pub const TYPE: &str = "Type";
pub const PAID: &str = "Paid";

/// Selected option values per facet group.
///
/// Backed by ordered collections so iteration, `Debug` output, and JSON
/// serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetSelection {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace `group`'s selection with `values`.
    ///
    /// ```
    /// use paperhub::facet::{FacetSelection, FACULTY};
    ///
    /// let selection = FacetSelection::new().with(FACULTY, ["engineering"]);
    /// assert!(selection.is_selected(FACULTY, "engineering"));
    /// ```
    pub fn with<I, V>(mut self, group: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.groups.insert(
            group.to_string(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Flip `value` in `group`. Returns `true` if the value is now selected.
    ///
    /// Removing the last value leaves the group present but empty, which
    /// still imposes no constraint.
    pub fn toggle(&mut self, group: &str, value: &str) -> bool {
        let values = self.groups.entry(group.to_string()).or_default();
        if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        }
    }

    /// Add `value` to `group` without toggling. Returns `false` if it was
    /// already selected.
    pub fn select(&mut self, group: &str, value: &str) -> bool {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(value.to_string())
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn clear_group(&mut self, group: &str) {
        self.groups.remove(group);
    }

    pub fn selected(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(group)
    }

    pub fn is_selected(&self, group: &str, value: &str) -> bool {
        self.groups
            .get(group)
            .is_some_and(|values| values.contains(value))
    }

    /// Number of ticked options across all groups (the sidebar badge).
    pub fn total_selected(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// True when no group constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.groups.values().all(BTreeSet::is_empty)
    }

    /// Groups with at least one selected value, in name order.
    pub fn active_groups(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(group, values)| (group.as_str(), values))
    }
}

impl<G, V> FromIterator<(G, V)> for FacetSelection
where
    G: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (G, V)>>(iter: T) -> Self {
        let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (group, value) in iter {
            groups.entry(group.into()).or_default().insert(value.into());
        }
        Self { groups }
    }
}
