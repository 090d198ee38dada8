//! Registration forms arriving as JSON.

use paperhub::{validate_registration, RegistrationForm};

#[test]
fn test_json_form_validates() {
    let form: RegistrationForm = serde_json::from_str(
        r#"{"fullName": "Aarav Thapa", "email": "aarav@tu.edu.np",
            "password": "Kathmandu@2025", "confirmPassword": "Kathmandu@2025"}"#,
    )
    .unwrap();
    assert!(validate_registration(&form).is_ok());
}

#[test]
fn test_json_form_reports_all_problems() {
    let form: RegistrationForm = serde_json::from_str(
        r#"{"fullName": "", "email": "not-an-email",
            "password": "password", "confirmPassword": "different"}"#,
    )
    .unwrap();
    let errors = validate_registration(&form).unwrap_err();

    assert_eq!(errors.for_field("fullName"), vec!["Full name is required"]);
    assert_eq!(errors.for_field("email"), vec!["Please enter a valid email address"]);
    assert_eq!(
        errors.for_field("password"),
        vec![
            "Password must contain at least one uppercase letter",
            "Password must contain at least one number",
            "Password must contain at least one special character",
        ]
    );
    assert_eq!(errors.for_field("confirmPassword"), vec!["Passwords don't match"]);
}

#[test]
fn test_missing_json_fields_are_rejected() {
    let parsed = serde_json::from_str::<RegistrationForm>(r#"{"fullName": "Only Name"}"#);
    assert!(parsed.is_err());
}
