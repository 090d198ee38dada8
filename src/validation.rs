// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Registration form validation.
//!
//! Every rule is checked and every failure reported, so a form can show all
//! its problems at once. Lengths count characters, not bytes.

use crate::error::{FieldError, ValidationErrors};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const FULL_NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 255;
const PASSWORD_MIN: usize = 8;

/// Fields submitted by the sign-up page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_full_name(full_name: &str) -> Vec<&'static str> {
    let trimmed = full_name.trim();
    let mut messages = Vec::new();
    if trimmed.is_empty() {
        messages.push("Full name is required");
    }
    if trimmed.chars().count() > FULL_NAME_MAX {
        messages.push("Full name must be less than 100 characters");
    }
    messages
}

pub fn validate_email(email: &str) -> Vec<&'static str> {
    let trimmed = email.trim();
    let mut messages = Vec::new();
    if !is_email_shaped(trimmed) {
        messages.push("Please enter a valid email address");
    }
    if trimmed.chars().count() > EMAIL_MAX {
        messages.push("Email must be less than 255 characters");
    }
    messages
}

pub fn validate_password(password: &str) -> Vec<&'static str> {
    let mut messages = Vec::new();
    if password.chars().count() < PASSWORD_MIN {
        messages.push("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        messages.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        messages.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        messages.push("Password must contain at least one number");
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        messages.push("Password must contain at least one special character");
    }
    messages
}

/// Check a whole form. Errors are ordered: name, email, password, confirmation.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationErrors> {
    let mut errors: Vec<FieldError> = Vec::new();
    let mut push = |field: &'static str, messages: Vec<&'static str>| {
        errors.extend(messages.into_iter().map(|message| FieldError { field, message }));
    };

    push("fullName", validate_full_name(&form.full_name));
    push("email", validate_email(&form.email));
    push("password", validate_password(&form.password));
    if form.password != form.confirm_password {
        push("confirmPassword", vec!["Passwords don't match"]);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "registration form rejected");
        Err(ValidationErrors { errors })
    }
}

/// Local part of `[A-Za-z0-9_'+-.]`, not ending in `'` or `.`; one or more
/// alphanumeric-led domain labels; an alphabetic TLD of two or more letters.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// The regex crate has no lookahead, so the leading-dot and double-dot
/// rules are checked separately.
fn is_email_shaped(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}
