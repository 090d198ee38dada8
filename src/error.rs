// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Filtering has none: it is total. Errors only arise at the edges, when a
//! catalog is read from disk or a registration form is checked.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a record catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON did not describe valid records.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One rule a form field broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule a registration form broke, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} validation error(s): {}", .errors.len(), join_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Messages reported for `field`.
    pub fn for_field(&self, field: &str) -> Vec<&'static str> {
        self.errors
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message)
            .collect()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
