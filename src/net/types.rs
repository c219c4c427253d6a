//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the API's auth and chat payloads so
//! serde round-trips stay lossless. Conversion into domain types (the
//! session) happens here, at the edge, so the rest of the shell never
//! sees wire spellings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Role, Session};

/// Credentials posted to `/api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New-account payload posted to `/api/auth/signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// One of `student`, `teacher`, `counselor`.
    pub role: String,
}

/// Successful login response.
///
/// `user_id` is numeric on the wire; the session keeps it as an opaque
/// string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub role: String,
    pub user_id: i64,
    pub name: String,
}

impl TokenResponse {
    /// Build the fully populated session the store expects.
    pub fn into_session(self) -> Session {
        Session {
            token: self.access_token,
            role: Role::parse(&self.role),
            user_id: self.user_id.to_string(),
            display_name: self.name,
        }
    }
}

/// A chat message as stored by the API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatMessageDto {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message: String,
    pub timestamp: String,
}
