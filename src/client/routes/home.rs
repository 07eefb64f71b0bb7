use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::session::use_identity};

#[component]
pub fn Home() -> Element {
    let identity = use_identity();
    let home = identity
        .read()
        .role()
        .and_then(|role| role.home_path().parse::<Route>().ok());

    rsx!(
        Title { "The Pearl" }
        Meta {
            name: "description",
            content: "Plan a trip around Sri Lanka with a local tour guide."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256 px-4",
                p { class: "text-4xl font-semibold text-violet-700", "The Pearl" }
                p { class: "text-center text-lg text-gray-600",
                    "Pick the places you want to see, tell us about your trip and travel with a guide who knows the island."
                }
                if let Some(home) = home {
                    Link { to: home, class: "btn btn-primary w-40", "Continue" }
                } else {
                    div { class: "flex gap-4",
                        Link { to: Route::Login {}, class: "btn btn-primary w-40", "Login" }
                        Link { to: Route::Signup {}, class: "btn btn-outline w-40", "Sign Up" }
                    }
                }
            }
        }
    )
}
