// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Normalization for comparisons.
//!
//! Only two rules exist. Text is compared after Unicode lowercasing (no
//! trimming, no whitespace collapsing, no diacritic stripping: `" Data"`
//! and `"data"` are different queries). Semester-like text is reduced to
//! its first run of ASCII digits.

/// Lowercase `value` for case-insensitive comparison.
#[inline]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Return the first maximal run of ASCII digits in `value`.
///
/// `"3rd Sem"` yields `"3"`, `"Sem 10"` yields `"10"`. Returns `None` when
/// the text has no digit at all, so callers can never confuse a missing
/// number with a selected empty string.
///
/// # Example
///
/// ```
/// use paperhub::util::leading_number;
///
/// assert_eq!(leading_number("3rd Sem"), Some("3"));
/// assert_eq!(leading_number("Final Year"), None);
/// ```
pub fn leading_number(value: &str) -> Option<&str> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let rest = &value[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}
