use chrono::Utc;
use pearl::{
    error::identity::IdentityError,
    model::user::Role,
    session::{
        guard::{route_access, RouteAccess},
        Identity,
    },
};
use pearl_test_utils::prelude::*;

#[test]
/// Expect the fixture tokens to resolve to their users and roles
fn resolves_fixture_tokens() {
    let tourist = Identity::from_token(Some(&token::tourist()));
    let guide = Identity::from_token(Some(&token::tour_guide()));
    let admin = Identity::from_token(Some(&token::admin()));

    assert_eq!(tourist.user_id(), Some(TEST_TOURIST_ID));
    assert_eq!(tourist.role(), Some(Role::Tourist));
    assert_eq!(tourist.display_name(), Some("Peter Maxwell"));
    assert_eq!(guide.user_id(), Some(TEST_GUIDE_ID));
    assert_eq!(guide.role(), Some(Role::TourGuide));
    assert_eq!(admin.role(), Some(Role::Admin));

    assert!(tourist.require_role(Role::Tourist).is_ok());
    assert_eq!(
        guide.require_role(Role::Admin).err(),
        Some(IdentityError::WrongRole {
            expected: Role::Admin,
            actual: Role::TourGuide,
        })
    );
}

#[test]
/// Expect garbage credentials to leave the user anonymous
fn garbage_token_is_anonymous() {
    for token in ["", "   ", "not-a-token", "a.b", "a.%%%.c"] {
        assert_eq!(Identity::from_token(Some(token)), Identity::Anonymous);
    }
    assert_eq!(
        Identity::Anonymous.require_role(Role::Tourist).err(),
        Some(IdentityError::Unauthenticated)
    );
}

#[test]
/// Expect an expired token to be reported as expired
fn expired_token() {
    let identity = Identity::from_token(Some(&token::expired_tourist()));
    let session = identity.session().unwrap();

    assert!(session.is_expired(Utc::now()));
    assert!(!Identity::from_token(Some(&token::tourist()))
        .session()
        .unwrap()
        .is_expired(Utc::now()));
}

#[test]
/// Expect each role to be kept inside its own area
fn route_access_by_role() {
    let tourist = Identity::from_token(Some(&token::tourist()));
    let guide = Identity::from_token(Some(&token::tour_guide()));
    let admin = Identity::from_token(Some(&token::admin()));

    let cases = [
        (&tourist, "/tourist/plan-trip", RouteAccess::Allow),
        (&tourist, "/admin/trips", RouteAccess::Redirect("/auth/login")),
        (&tourist, "/auth/login", RouteAccess::Redirect("/tourist/home")),
        (&tourist, "/tourist/destinations", RouteAccess::Allow),
        (&tourist, "/tourist/destinations/5", RouteAccess::Allow),
        (&tourist, "/tourist/account", RouteAccess::Allow),
        (&tourist, "/tour-guide/active-tours", RouteAccess::Redirect("/auth/login")),
        (&guide, "/tour-guide/tour-requests", RouteAccess::Allow),
        (&guide, "/tourist/home", RouteAccess::Redirect("/auth/login")),
        (&guide, "/auth/login", RouteAccess::Redirect("/tour-guide/account")),
        (&guide, "/tour-guide/active-tours", RouteAccess::Allow),
        (&guide, "/tour-guide/completed-tours", RouteAccess::Allow),
        (&guide, "/tourist/destinations/5", RouteAccess::Redirect("/auth/login")),
        (&admin, "/admin/destinations?page=2", RouteAccess::Allow),
        (&admin, "/auth/login", RouteAccess::Redirect("/admin/dashboard")),
        (&admin, "/", RouteAccess::Allow),
        (&Identity::Anonymous, "/tourist/trips", RouteAccess::Redirect("/auth/login")),
        (&Identity::Anonymous, "/auth/login", RouteAccess::Allow),
        (&Identity::Anonymous, "/auth/signup", RouteAccess::Allow),
        (&Identity::Anonymous, "/tourist/destinations", RouteAccess::Redirect("/auth/login")),
        (&Identity::Anonymous, "/tourist/account", RouteAccess::Redirect("/auth/login")),
    ];

    for (identity, path, expected) in cases {
        assert_eq!(route_access(identity, path), expected, "{}", path);
    }
}
