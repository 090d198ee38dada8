// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode assertions on filter output.
//!
//! | Contract                   | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_positions_subset`   | result indices are in bounds               |
//! |                            | result indices strictly increase (order)   |
//!
//! ```ignore
//! let positions = filter_positions(&records, &selection, query);
//! check_positions_subset(&positions, records.len()); // no-op in release
//! ```

/// Check that `positions` picks an ordered subset of a collection of `len`.
///
/// # Panics (debug builds only)
/// Panics if a position is out of bounds or positions are not strictly
/// increasing (a duplicate or a reordering).
#[inline]
pub fn check_positions_subset(positions: &[usize], len: usize) {
    debug_assert!(
        positions.len() <= len,
        "Contract violation: result has {} records, input only {}",
        positions.len(),
        len
    );

    for (i, &position) in positions.iter().enumerate() {
        debug_assert!(
            position < len,
            "Contract violation: positions[{}] = {} >= input length {}",
            i,
            position,
            len
        );
    }

    for i in 1..positions.len() {
        debug_assert!(
            positions[i - 1] < positions[i],
            "Contract violation: order not preserved - positions[{}] = {} >= positions[{}] = {}",
            i - 1,
            positions[i - 1],
            i,
            positions[i]
        );
    }
}
