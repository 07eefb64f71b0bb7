use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowRightFromBracket, FaUser};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        router::Route,
        store::session::{sign_out, use_identity},
    },
    model::user::Role,
};

fn role_links(role: Role) -> Vec<(Route, &'static str)> {
    match role {
        Role::Tourist => vec![
            (Route::TouristHome {}, "Home"),
            (Route::TouristDestinations {}, "Destinations"),
            (Route::PlanTrip {}, "Plan a Trip"),
            (Route::TouristTrips {}, "My Trips"),
            (Route::TouristChat {}, "Chat"),
            (Route::TouristAccount {}, "Account"),
        ],
        Role::TourGuide => vec![
            (Route::GuideAccount {}, "Account"),
            (Route::TourRequests {}, "Tour Requests"),
            (Route::ActiveTours {}, "Active Tours"),
            (Route::CompletedTours {}, "Completed Tours"),
            (Route::GuideChat {}, "Chat"),
        ],
        Role::Admin => vec![
            (Route::AdminDashboard {}, "Dashboard"),
            (Route::AdminDestinations {}, "Destinations"),
            (Route::AdminTrips {}, "Trips"),
            (Route::AdminTourGuides {}, "Tour Guides"),
        ],
    }
}

#[component]
pub fn Navbar() -> Element {
    let identity = use_identity();
    let navigator = use_navigator();

    let current = identity.read().clone();
    let links = current.role().map(role_links).unwrap_or_default();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "The Pearl"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-2",
                    for (route, label) in links {
                        li {
                            Link { to: route, "{label}" }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(name) = current.display_name() {
                    div { class: "flex items-center gap-2",
                        Icon { width: 16, height: 16, icon: FaUser }
                        p { "{name}" }
                        button {
                            class: "btn btn-outline flex gap-2",
                            onclick: move |_| {
                                sign_out(identity);
                                navigator.replace(Route::Login {});
                            },
                            Icon { width: 16, height: 16, icon: FaArrowRightFromBracket }
                            "Logout"
                        }
                    }
                } else {
                    div { class: "flex gap-2",
                        Link { to: Route::Signup {}, class: "btn btn-ghost",
                            "Sign Up"
                        }
                        Link { to: Route::Login {}, class: "btn btn-primary",
                            "Login"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
