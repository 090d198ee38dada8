// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Selection and query prepared for repeated matching.
//!
//! Compiling lowercases the query and every selected value once, drops
//! empty groups, and leaves a list of (group, values) predicates that each
//! record is checked against with short-circuit AND.

use super::query::TextQuery;
use super::{FacetField, Filterable};
use crate::facet::FacetSelection;
use crate::util::{fold_case, leading_number};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct GroupPredicate {
    group: String,
    values: HashSet<String>,
}

impl GroupPredicate {
    fn accepts(&self, field: FacetField<'_>) -> bool {
        match field {
            FacetField::Text(text) => self.values.contains(&fold_case(text)),
            FacetField::Number(number) => self.values.contains(&number.to_string()),
            FacetField::NumericPrefix(text) => {
                leading_number(text).is_some_and(|digits| self.values.contains(digits))
            }
            FacetField::Absent => false,
        }
    }
}

/// A [`FacetSelection`] plus query, ready to test records.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    query: TextQuery,
    groups: Vec<GroupPredicate>,
}

impl CompiledFilter {
    pub fn new(selection: &FacetSelection, query: &str) -> Self {
        // Digits have no case, so lowering every selected value is safe for
        // the numeric rules too.
        let groups = selection
            .active_groups()
            .map(|(group, values)| GroupPredicate {
                group: group.to_string(),
                values: values.iter().map(|value| fold_case(value)).collect(),
            })
            .collect();

        Self {
            query: TextQuery::new(query),
            groups,
        }
    }

    /// Number of groups that actually constrain results.
    pub fn active_group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        if !self.query.matches(record.searchable_fields()) {
            return false;
        }

        self.groups.iter().all(|predicate| match record.facet(&predicate.group) {
            Some(field) => predicate.accepts(field),
            None => true,
        })
    }
}
