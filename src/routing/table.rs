//! Declared route table.
//!
//! DESIGN
//! ======
//! The route surface is configuration data, fixed at build time. Each
//! entry pairs a path with its access requirement; `decide` in the parent
//! module interprets the table, so adding a screen means adding a row
//! here, not a branch there.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::Page;
use crate::state::session::Role;

/// Canonical paths for the declared routes.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const STUDENT: &str = "/student";
    pub const TEACHER: &str = "/teacher";
    pub const COUNSELOR: &str = "/counselor";
    pub const CHAT: &str = "/chat";
}

/// Access requirement for a declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable only without a session; renders the given page.
    Public(Page),
    /// The root: renders the dashboard bound to the session's role.
    RoleHome,
    /// Requires the exact role; renders the given page on a match.
    Role(Role, Page),
    /// Requires any authenticated session.
    Authenticated(Page),
}

/// One declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub path: &'static str,
    pub access: Access,
}

/// Every route the shell declares.
pub static ROUTES: [RouteRule; 7] = [
    RouteRule { path: paths::LOGIN, access: Access::Public(Page::Login) },
    RouteRule { path: paths::SIGNUP, access: Access::Public(Page::Signup) },
    RouteRule { path: paths::HOME, access: Access::RoleHome },
    RouteRule { path: paths::STUDENT, access: Access::Role(Role::Student, Page::StudentDashboard) },
    RouteRule { path: paths::TEACHER, access: Access::Role(Role::Teacher, Page::TeacherDashboard) },
    RouteRule {
        path: paths::COUNSELOR,
        access: Access::Role(Role::Counselor, Page::CounselorDashboard),
    },
    RouteRule { path: paths::CHAT, access: Access::Authenticated(Page::Chat) },
];

/// Find the declared route for `path`, if any.
pub fn lookup(path: &str) -> Option<&'static RouteRule> {
    ROUTES.iter().find(|rule| rule.path == path)
}
