// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the filter engine.
//!
//! Debug builds check that every result is an ordered subset of its input.
//! Release builds compile the checks away.

pub mod contracts;
