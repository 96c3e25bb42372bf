use super::*;

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  alice  ", "x"),
        Ok(Credentials { username: "alice".to_owned(), password: "x".to_owned() })
    );
}

#[test]
fn validate_credentials_keeps_password_as_typed() {
    let creds = validate_credentials("alice", " secret ").unwrap();
    assert_eq!(creds.password, " secret ");
}

#[test]
fn validate_credentials_requires_username() {
    assert_eq!(validate_credentials("   ", "x"), Err(CREDENTIALS_REQUIRED));
    assert_eq!(validate_credentials("", "x"), Err(CREDENTIALS_REQUIRED));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(validate_credentials("alice", ""), Err(CREDENTIALS_REQUIRED));
    assert_eq!(validate_credentials("alice", "   "), Err(CREDENTIALS_REQUIRED));
}

#[test]
fn labels_follow_mode() {
    assert_eq!(heading(AuthMode::Login), "Log in");
    assert_eq!(heading(AuthMode::Register), "Register");
    assert_eq!(submit_label(AuthMode::Register), "Create account");
    assert_eq!(switch_prompt(AuthMode::Login).1, "Register here");
    assert_eq!(switch_prompt(AuthMode::Register).1, "Log in here");
}
