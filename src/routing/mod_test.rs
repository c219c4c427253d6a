use super::*;

fn session(role: Role) -> Session {
    Session {
        token: "tok-abc".to_owned(),
        role,
        user_id: "7".to_owned(),
        display_name: "Ann".to_owned(),
    }
}

// =============================================================
// Public paths
// =============================================================

#[test]
fn anonymous_renders_login_page() {
    assert_eq!(decide(None, paths::LOGIN), Decision::Render(Page::Login));
}

#[test]
fn anonymous_renders_signup_page() {
    assert_eq!(decide(None, paths::SIGNUP), Decision::Render(Page::Signup));
}

#[test]
fn authenticated_bounces_off_public_paths() {
    for role in [Role::Student, Role::Teacher, Role::Counselor] {
        let s = session(role);
        assert_eq!(decide(Some(&s), paths::LOGIN), Decision::Redirect(paths::HOME));
        assert_eq!(decide(Some(&s), paths::SIGNUP), Decision::Redirect(paths::HOME));
    }
}

// =============================================================
// Anonymous visitors
// =============================================================

#[test]
fn anonymous_protected_path_goes_to_login() {
    assert_eq!(decide(None, paths::TEACHER), Decision::Redirect(paths::LOGIN));
    assert_eq!(decide(None, paths::HOME), Decision::Redirect(paths::LOGIN));
    assert_eq!(decide(None, paths::CHAT), Decision::Redirect(paths::LOGIN));
}

#[test]
fn anonymous_undeclared_path_goes_to_login() {
    assert_eq!(decide(None, "/reports"), Decision::Redirect(paths::LOGIN));
}

// =============================================================
// Role home
// =============================================================

#[test]
fn home_renders_dashboard_for_each_role() {
    let student = session(Role::Student);
    let teacher = session(Role::Teacher);
    let counselor = session(Role::Counselor);
    assert_eq!(decide(Some(&student), paths::HOME), Decision::Render(Page::StudentDashboard));
    assert_eq!(decide(Some(&teacher), paths::HOME), Decision::Render(Page::TeacherDashboard));
    assert_eq!(decide(Some(&counselor), paths::HOME), Decision::Render(Page::CounselorDashboard));
}

#[test]
fn unrecognized_role_lands_on_counselor_dashboard() {
    // Role::parse is the only producer of roles; anything outside the two
    // known spellings maps to Counselor.
    let s = session(Role::parse("principal"));
    assert_eq!(decide(Some(&s), paths::HOME), Decision::Render(Page::CounselorDashboard));
}

#[test]
fn dashboard_for_maps_every_role() {
    assert_eq!(dashboard_for(Role::Student), Page::StudentDashboard);
    assert_eq!(dashboard_for(Role::Teacher), Page::TeacherDashboard);
    assert_eq!(dashboard_for(Role::Counselor), Page::CounselorDashboard);
}

// =============================================================
// Role-gated paths
// =============================================================

#[test]
fn role_mismatch_redirects_home() {
    let student = session(Role::Student);
    let teacher = session(Role::Teacher);
    let counselor = session(Role::Counselor);
    assert_eq!(decide(Some(&student), paths::TEACHER), Decision::Redirect(paths::HOME));
    assert_eq!(decide(Some(&teacher), paths::COUNSELOR), Decision::Redirect(paths::HOME));
    assert_eq!(decide(Some(&counselor), paths::STUDENT), Decision::Redirect(paths::HOME));
}

#[test]
fn role_match_renders_dashboard() {
    let student = session(Role::Student);
    let teacher = session(Role::Teacher);
    let counselor = session(Role::Counselor);
    assert_eq!(decide(Some(&student), paths::STUDENT), Decision::Render(Page::StudentDashboard));
    assert_eq!(decide(Some(&teacher), paths::TEACHER), Decision::Render(Page::TeacherDashboard));
    assert_eq!(
        decide(Some(&counselor), paths::COUNSELOR),
        Decision::Render(Page::CounselorDashboard)
    );
}

// =============================================================
// Any-authenticated and undeclared paths
// =============================================================

#[test]
fn chat_renders_for_every_role() {
    for role in [Role::Student, Role::Teacher, Role::Counselor] {
        let s = session(role);
        assert_eq!(decide(Some(&s), paths::CHAT), Decision::Render(Page::Chat));
    }
}

#[test]
fn authenticated_undeclared_path_redirects_home() {
    let s = session(Role::Student);
    assert_eq!(decide(Some(&s), "/reports"), Decision::Redirect(paths::HOME));
    assert_eq!(decide(Some(&s), "/login/extra"), Decision::Redirect(paths::HOME));
}
