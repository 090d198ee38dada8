// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Free-text query predicate.

use crate::util::fold_case;

/// A query lowered once and tested against many records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold_case(query),
        }
    }

    /// An empty query matches every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True if the query is empty or occurs (case-insensitively) in any field.
    pub fn matches<'a>(&self, mut fields: impl Iterator<Item = &'a str>) -> bool {
        self.is_empty() || fields.any(|field| fold_case(field).contains(&self.needle))
    }
}
