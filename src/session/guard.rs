use crate::{model::user::Role, session::Identity};

const LOGIN_PATH: &str = "/auth/login";
const AUTH_PAGES: [&str; 2] = ["/auth/login", "/auth/signup"];
const PROTECTED: [Role; 3] = [Role::Admin, Role::TourGuide, Role::Tourist];

/// Outcome of checking whether the current user may open a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    Redirect(&'static str),
}

fn has_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide whether `identity` may open `path`.
///
/// # Behavior
/// - Anonymous users may open the login and signup pages; every role area sends
///   them to the login page.
/// - Signed in users opening the login or signup page are sent to their role's home.
/// - Signed in users opening another role's area are sent to the login page.
/// - Everything else is allowed.
pub fn route_access(identity: &Identity, path: &str) -> RouteAccess {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let is_auth_page = AUTH_PAGES.contains(&path.trim_end_matches('/'));
    let area = PROTECTED
        .into_iter()
        .find(|role| has_prefix(path, role.path_prefix()));

    match identity.role() {
        None => match area {
            Some(_) if !is_auth_page => RouteAccess::Redirect(LOGIN_PATH),
            _ => RouteAccess::Allow,
        },
        Some(role) if is_auth_page => RouteAccess::Redirect(role.home_path()),
        Some(role) => match area {
            Some(area) if area != role => RouteAccess::Redirect(LOGIN_PATH),
            _ => RouteAccess::Allow,
        },
    }
}
