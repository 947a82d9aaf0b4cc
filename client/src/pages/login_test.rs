use super::*;

#[test]
fn trims_email() {
    assert_eq!(validate_login_input("  angler@example.com ", "pw"), Ok("angler@example.com".to_owned()));
}

#[test]
fn blank_email_is_rejected() {
    assert_eq!(validate_login_input("   ", "pw"), Err(ValidationError::MissingField("email")));
}

#[test]
fn empty_password_is_rejected() {
    assert_eq!(
        validate_login_input("angler@example.com", ""),
        Err(ValidationError::MissingField("password"))
    );
}

#[test]
fn missing_field_message_names_the_field() {
    let err = validate_login_input("", "").unwrap_err();
    assert_eq!(err.to_string(), "Enter your email.");
}
