//! Route authorization core.
//!
//! DESIGN
//! ======
//! Authorization is a pure function from `(current session, requested
//! path)` to a [`Decision`]: render a page or redirect elsewhere. All
//! policy lives in the declarative route table in [`table`]; the router
//! view layer in `app` only executes whatever this module decides, so the
//! whole access-control surface is unit-testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! `decide` is total: every path resolves to a decision, declared or not.
//! There is no error variant and no panic path.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod table;

use crate::state::session::{Role, Session};
use table::{Access, RouteRule, lookup, paths};

/// Route-level screens the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    StudentDashboard,
    TeacherDashboard,
    CounselorDashboard,
    Chat,
}

/// Outcome of authorizing a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Render the given page at the requested path.
    Render(Page),
    /// Navigate to another path instead.
    Redirect(&'static str),
}

/// The dashboard page bound to a role.
pub fn dashboard_for(role: Role) -> Page {
    match role {
        Role::Student => Page::StudentDashboard,
        Role::Teacher => Page::TeacherDashboard,
        Role::Counselor => Page::CounselorDashboard,
    }
}

/// Authorize `path` against the current session.
///
/// Rules apply in order: public paths render only for anonymous visitors
/// and bounce signed-in users home; everything else requires a session
/// (anonymous visitors go to the login screen); the root renders the
/// dashboard for the session's role; role-gated paths bounce mismatched
/// roles home; any-authenticated paths render; undeclared paths go home.
pub fn decide(session: Option<&Session>, path: &str) -> Decision {
    let rule = lookup(path);

    let Some(session) = session else {
        return match rule {
            Some(RouteRule { access: Access::Public(page), .. }) => Decision::Render(*page),
            _ => Decision::Redirect(paths::LOGIN),
        };
    };

    match rule {
        Some(RouteRule { access: Access::Public(_), .. }) => Decision::Redirect(paths::HOME),
        Some(RouteRule { access: Access::RoleHome, .. }) => {
            Decision::Render(dashboard_for(session.role))
        }
        Some(RouteRule { access: Access::Role(required, page), .. }) => {
            if session.role == *required {
                Decision::Render(*page)
            } else {
                Decision::Redirect(paths::HOME)
            }
        }
        Some(RouteRule { access: Access::Authenticated(page), .. }) => Decision::Render(*page),
        None => Decision::Redirect(paths::HOME),
    }
}
