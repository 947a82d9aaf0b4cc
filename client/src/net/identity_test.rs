use super::*;
use futures::executor::block_on;

#[test]
fn name_from_email_takes_local_part() {
    assert_eq!(name_from_email("angler@lake.com"), "angler");
}

#[test]
fn name_from_email_without_at_keeps_whole_string() {
    assert_eq!(name_from_email("angler"), "angler");
}

#[test]
fn mock_login_builds_identity_from_email() {
    let identity = block_on(MockIdentityProvider.login("angler@lake.com", "pw")).unwrap();
    assert_eq!(identity.id, "1");
    assert_eq!(identity.email, "angler@lake.com");
    assert_eq!(identity.name, "angler");
    assert!(identity.avatar.is_some());
}

#[test]
fn mock_signup_keeps_given_name() {
    let identity = block_on(MockIdentityProvider.signup("a@b.com", "pw", "Ada Angler")).unwrap();
    assert_eq!(identity.name, "Ada Angler");
    assert_eq!(identity.email, "a@b.com");
}

#[test]
fn mock_google_returns_fixed_profile() {
    let identity = block_on(MockIdentityProvider.login_with_google()).unwrap();
    assert_eq!(identity.email, "user@gmail.com");
    assert_eq!(identity.name, "John Angler");
}
