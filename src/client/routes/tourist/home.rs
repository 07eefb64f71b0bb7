use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHeart, FaLocationDot, FaPlus};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route, store::session::use_identity};

#[component]
pub fn TouristHome() -> Element {
    let identity = use_identity();
    let name = identity
        .read()
        .display_name()
        .unwrap_or("traveller")
        .to_string();

    rsx!(
        Title { "Home | The Pearl" }
        Page { title: format!("Welcome, {}", name),
            div { class: "flex flex-col gap-6 max-w-256",
                p { class: "text-lg text-gray-600",
                    "Sri Lanka packs beaches, ancient cities, tea country and wildlife into one island. Build your trip from the destinations on your wishlist and a local guide will take you there."
                }
                div { class: "flex gap-4",
                    Link { to: Route::TouristDestinations {}, class: "btn btn-outline flex gap-2",
                        Icon { width: 14, height: 14, icon: FaHeart }
                        "Browse Destinations"
                    }
                    Link { to: Route::PlanTrip {}, class: "btn btn-primary flex gap-2",
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Plan a Trip"
                    }
                    Link { to: Route::TouristTrips {}, class: "btn btn-outline flex gap-2",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "My Trips"
                    }
                }
            }
        }
    )
}
