//! Session identity and the store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the single source of truth for "who is logged
//! in". `App` provides one instance in context as an `RwSignal`; the
//! route gate re-derives its decision from the store's current value on
//! every change, so login and logout take effect in the same update
//! cycle with no stale decisions.
//!
//! ERROR HANDLING
//! ==============
//! Bootstrap never fails: partially populated or malformed storage is
//! treated as "no session", not an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Persisted storage keys owned by the session store. Logout removes
/// exactly these.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const ROLE: &str = "role";
    pub const USER_ID: &str = "user_id";
    pub const USER_NAME: &str = "user_name";

    pub const ALL: [&str; 4] = [TOKEN, ROLE, USER_ID, USER_NAME];
}

/// The role an authenticated user acts as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    Counselor,
}

impl Role {
    /// Map a stored role string to a role.
    ///
    /// Unknown values fall back to `Counselor`, preserving the dashboard
    /// default the platform has always shipped with. Callers gate on the
    /// raw string being non-empty before parsing.
    pub fn parse(value: &str) -> Self {
        match value {
            "student" => Self::Student,
            "teacher" => Self::Teacher,
            _ => Self::Counselor,
        }
    }

    /// The wire/storage spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Counselor => "counselor",
        }
    }
}

/// An authenticated identity. Either fully populated or absent; no
/// partial session is ever held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque credential presented to the API on authorized requests.
    pub token: String,
    /// Determines which dashboard and which routes are reachable.
    pub role: Role,
    /// Opaque identifier, display/attribution only.
    pub user_id: String,
    /// Presentation-only name.
    pub display_name: String,
}

/// Owner of the current session and its persisted copy.
///
/// Created in the loading phase; `bootstrap` hydrates from storage once,
/// client-side, before any route is rendered.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    current: Option<Session>,
    loading: bool,
}

/// The store as wired in the running application.
pub type AppSessionStore = SessionStore<BrowserStorage>;

impl<S: KeyValueStorage> SessionStore<S> {
    /// An empty store still in the loading phase.
    pub fn new(storage: S) -> Self {
        Self { storage, current: None, loading: true }
    }

    /// Hydrate the session from persisted storage and end the loading
    /// phase. Synchronous; a token and a non-empty role must both be
    /// present, otherwise the store holds no session.
    pub fn bootstrap(&mut self) {
        self.current = Self::load(&self.storage);
        self.loading = false;
    }

    fn load(storage: &S) -> Option<Session> {
        let token = storage.read(keys::TOKEN).filter(|t| !t.is_empty())?;
        let role = storage.read(keys::ROLE).filter(|r| !r.is_empty())?;
        Some(Session {
            token,
            role: Role::parse(&role),
            user_id: storage.read(keys::USER_ID).unwrap_or_default(),
            display_name: storage.read(keys::USER_NAME).unwrap_or_default(),
        })
    }

    /// True until `bootstrap` has run. No route is rendered while the
    /// store is loading.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Replace the current session and persist it. The login collaborator
    /// hands over a fully populated session; no validation happens here.
    pub fn login(&mut self, session: Session) {
        self.storage.write(keys::TOKEN, &session.token);
        self.storage.write(keys::ROLE, session.role.as_str());
        self.storage.write(keys::USER_ID, &session.user_id);
        self.storage.write(keys::USER_NAME, &session.display_name);
        self.current = Some(session);
    }

    /// Clear the session and erase its persisted fields. Idempotent.
    pub fn logout(&mut self) {
        for key in keys::ALL {
            self.storage.remove(key);
        }
        self.current = None;
    }
}
