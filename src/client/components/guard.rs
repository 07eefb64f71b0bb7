use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{router::Route, store::session::use_identity},
    session::guard::{route_access, RouteAccess},
};

/// Layout keeping users out of pages their identity may not open
#[component]
pub fn RouteGuard() -> Element {
    let identity = use_identity();
    let path = use_route::<Route>().to_string();

    let access = route_access(&identity.read(), &path);

    if let RouteAccess::Redirect(target) = access {
        tracing::debug!(from = %path, to = %target, "Redirecting");

        match target.parse::<Route>() {
            Ok(route) => {
                navigator().replace(route);
            }
            Err(e) => tracing::error!("Invalid redirect target {}: {}", target, e),
        }

        return rsx!();
    }

    rsx!(Outlet::<Route> {})
}
