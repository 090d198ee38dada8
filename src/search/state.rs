// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! The caller-owned search state for one listing view.

use super::{filter, Filterable};
use crate::facet::FacetSelection;
use serde::{Deserialize, Serialize};

/// Query text and facet selection for a view, kept in one place.
///
/// The engine never holds on to this; each render passes it in fresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub selection: FacetSelection,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle(&mut self, group: &str, value: &str) -> bool {
        self.selection.toggle(group, value)
    }

    /// Drop the query and every facet.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selection.clear();
    }

    pub fn apply<'a, R: Filterable>(&self, records: &'a [R]) -> Vec<&'a R> {
        filter(records, &self.selection, &self.query)
    }
}
