use super::*;

#[test]
fn validate_signup_input_trims_and_builds_the_request() {
    let request =
        validate_signup_input(" Ann ", " a@b.com ", "pw", "teacher").expect("valid input");
    assert_eq!(request.name, "Ann");
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, "pw");
    assert_eq!(request.role, "teacher");
}

#[test]
fn validate_signup_input_requires_every_field() {
    let msg = "Enter name, email, and password.";
    assert_eq!(validate_signup_input("", "a@b.com", "pw", "student").unwrap_err(), msg);
    assert_eq!(validate_signup_input("Ann", "   ", "pw", "student").unwrap_err(), msg);
    assert_eq!(validate_signup_input("Ann", "a@b.com", "", "student").unwrap_err(), msg);
}

#[test]
fn validate_signup_input_passes_the_role_through() {
    let request = validate_signup_input("Ann", "a@b.com", "pw", "counselor").expect("valid input");
    assert_eq!(request.role, "counselor");
}
