use super::*;

#[test]
fn greeting_includes_username() {
    assert_eq!(greeting("alice"), "Hello, alice");
}
