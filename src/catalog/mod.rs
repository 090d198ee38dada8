// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Record sources.
//!
//! The engine doesn't care where records come from. This module provides the
//! two sources the CLI uses: the built-in sample catalog and JSON files.
//!
//! ```json
//! {
//!   "papers": [{ "subject": "...", "year": 2024, "semester": "3rd Sem",
//!                "examType": "Final", "faculty": "Engineering" }],
//!   "jobs":   [{ "company": "...", "role": "...", "location": "...",
//!                "deadline": "Jan 15, 2025", "type": "internship" }]
//! }
//! ```
//!
//! Either key may be omitted. Records keep file order, which is the order
//! results are shown in.

mod sample;

use crate::error::CatalogError;
use crate::types::{JobRecord, PaperRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An immutable snapshot of listings, loaded once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub papers: Vec<PaperRecord>,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

impl Catalog {
    /// The demo listings: twelve papers and eight jobs.
    pub fn sample() -> Self {
        Self {
            papers: sample::papers(),
            jobs: sample::jobs(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            papers = catalog.papers.len(),
            jobs = catalog.jobs.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}
