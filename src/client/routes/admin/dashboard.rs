use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBriefcase, FaHourglassStart, FaMap, FaUserCheck};
use dioxus_free_icons::Icon;

use crate::{
    client::{components::Page, store::session::use_api},
    error::api::ApiError,
    model::trip::TripStatus,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct DashboardCounts {
    destinations: usize,
    completed_trips: usize,
    pending_trips: usize,
    tour_guides: usize,
}

#[component]
fn StatCard(title: &'static str, value: usize, children: Element) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body items-center text-center",
                span { class: "text-violet-500", {children} }
                h3 { class: "text-lg text-gray-600", "{title}" }
                p { class: "text-4xl font-bold text-violet-600", "{value}" }
            }
        }
    )
}

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();

    let counts = use_resource(move || {
        let api = api.clone();

        async move {
            let (destinations, trips, guides) = futures::join!(
                api.list_destinations(),
                api.list_trips(),
                api.list_tour_guides(),
            );
            let trips = trips?;

            Ok::<_, ApiError>(DashboardCounts {
                destinations: destinations?.len(),
                completed_trips: trips
                    .iter()
                    .filter(|t| t.trip_status == TripStatus::Completed)
                    .count(),
                pending_trips: trips
                    .iter()
                    .filter(|t| t.trip_status == TripStatus::Pending)
                    .count(),
                tour_guides: guides?.len(),
            })
        }
    });

    rsx!(
        Title { "Dashboard | The Pearl" }
        Page { title: "Welcome",
            match &*counts.read_unchecked() {
                None => rsx!(p { "Loading dashboard data..." }),
                Some(Err(e)) => rsx!(p { class: "text-red-700", "Error: {e}" }),
                Some(Ok(counts)) => rsx!(
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                        StatCard { title: "Total Destinations", value: counts.destinations,
                            Icon { width: 36, height: 36, icon: FaMap }
                        }
                        StatCard { title: "Trips Completed", value: counts.completed_trips,
                            Icon { width: 36, height: 36, icon: FaBriefcase }
                        }
                        StatCard { title: "Pending Requests", value: counts.pending_trips,
                            Icon { width: 36, height: 36, icon: FaHourglassStart }
                        }
                        StatCard { title: "Tour Guides", value: counts.tour_guides,
                            Icon { width: 36, height: 36, icon: FaUserCheck }
                        }
                    }
                ),
            }
        }
    )
}
