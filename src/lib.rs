// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Faceted search over exam papers and job listings.
//!
//! The core is a pure filter: records in, an ordered subset out, driven by a
//! [`FacetSelection`] and a free-text query. Around it sit the record types,
//! a catalog loader, and registration form validation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐     ┌──────────────────┐
//! │   catalog    │───▶│   types      │────▶│  search::filter  │──▶ Vec<&R>
//! │ (JSON/sample)│    │ Paper / Job  │     │ (CompiledFilter) │
//! └──────────────┘    └──────────────┘     └──────────────────┘
//!                                                   ▲
//!                     ┌──────────────┐              │
//!                     │    facet     │──────────────┘
//!                     │ (selection)  │
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use paperhub::{filter, Catalog, FacetSelection};
//! use paperhub::facet::SEMESTER;
//!
//! let catalog = Catalog::sample();
//! let mut selection = FacetSelection::new();
//! selection.toggle(SEMESTER, "3");
//!
//! let results = filter(&catalog.papers, &selection, "");
//! assert!(results.iter().all(|p| p.semester == "3rd Sem"));
//! ```

pub mod catalog;
pub mod error;
pub mod facet;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;
pub mod validation;
pub mod verify;

pub use catalog::Catalog;
pub use error::{CatalogError, FieldError, ValidationErrors};
pub use facet::{FacetGroup, FacetOption, FacetSelection};
#[cfg(feature = "parallel")]
pub use search::filter_parallel;
pub use search::{
    filter, filter_positions, matches, CompiledFilter, FacetField, Filterable, SearchState,
};
pub use types::{ExamType, JobKind, JobRecord, PaperRecord, Record};
pub use validation::{validate_registration, RegistrationForm};
