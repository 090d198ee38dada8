// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the facet and query predicates.

pub mod normalize;

pub use normalize::{fold_case, leading_number};
