use super::*;

fn backend_token_json() -> &'static str {
    r#"{
        "access_token": "eyJabc",
        "token_type": "bearer",
        "role": "teacher",
        "user_id": 7,
        "name": "Ann"
    }"#
}

#[test]
fn token_response_deserializes_the_backend_payload() {
    let token: TokenResponse = serde_json::from_str(backend_token_json()).expect("decode");
    assert_eq!(token.access_token, "eyJabc");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.role, "teacher");
    assert_eq!(token.user_id, 7);
    assert_eq!(token.name, "Ann");
}

#[test]
fn into_session_maps_wire_fields_to_the_session() {
    let token: TokenResponse = serde_json::from_str(backend_token_json()).expect("decode");
    let session = token.into_session();
    assert_eq!(session.token, "eyJabc");
    assert_eq!(session.role, Role::Teacher);
    assert_eq!(session.user_id, "7");
    assert_eq!(session.display_name, "Ann");
}

#[test]
fn into_session_parses_unknown_roles_as_counselor() {
    let token = TokenResponse {
        access_token: "eyJabc".to_owned(),
        token_type: "bearer".to_owned(),
        role: "principal".to_owned(),
        user_id: 9,
        name: "Sam".to_owned(),
    };
    assert_eq!(token.into_session().role, Role::Counselor);
}

#[test]
fn chat_message_dto_deserializes() {
    let json = r#"{
        "id": 12,
        "sender_id": 7,
        "receiver_id": 9,
        "message": "hello",
        "timestamp": "2024-05-01T10:00:00"
    }"#;
    let dto: ChatMessageDto = serde_json::from_str(json).expect("decode");
    assert_eq!(dto.id, 12);
    assert_eq!(dto.sender_id, 7);
    assert_eq!(dto.receiver_id, 9);
    assert_eq!(dto.message, "hello");
}

#[test]
fn login_request_serializes_both_fields() {
    let body = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let json = serde_json::to_value(&body).expect("encode");
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn signup_request_serializes_the_role_spelling() {
    let body = SignupRequest {
        name: "Ann".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        role: "counselor".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("encode");
    assert_eq!(json["role"], "counselor");
}
