use super::*;

#[test]
fn seven_routes_are_declared() {
    assert_eq!(ROUTES.len(), 7);
}

#[test]
fn declared_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn exactly_login_and_signup_are_public() {
    let public: Vec<&str> = ROUTES
        .iter()
        .filter(|rule| matches!(rule.access, Access::Public(_)))
        .map(|rule| rule.path)
        .collect();
    assert_eq!(public, vec![paths::LOGIN, paths::SIGNUP]);
}

#[test]
fn root_is_the_role_home() {
    let rule = lookup(paths::HOME).expect("root must be declared");
    assert_eq!(rule.access, Access::RoleHome);
}

#[test]
fn lookup_finds_declared_paths() {
    for rule in &ROUTES {
        assert_eq!(lookup(rule.path).map(|found| found.path), Some(rule.path));
    }
}

#[test]
fn lookup_misses_unknown_paths() {
    assert!(lookup("/reports").is_none());
    assert!(lookup("").is_none());
    assert!(lookup("/LOGIN").is_none());
}

#[test]
fn role_gated_paths_cover_every_role() {
    let gated: Vec<Role> = ROUTES
        .iter()
        .filter_map(|rule| match rule.access {
            Access::Role(role, _) => Some(role),
            _ => None,
        })
        .collect();
    assert_eq!(gated, vec![Role::Student, Role::Teacher, Role::Counselor]);
}
