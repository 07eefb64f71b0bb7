use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{Page, TripCard},
    router::Route,
    store::session::{use_api, use_identity},
};

#[component]
pub fn TouristTrips() -> Element {
    let api = use_api();
    let identity = use_identity();

    let trips = use_resource(move || {
        let api = api.clone();
        let tourist_id = identity.read().user_id();

        async move {
            match tourist_id {
                Some(tourist_id) => api.tourist_accepted_trips(tourist_id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    rsx!(
        Title { "My Trips | The Pearl" }
        Page { title: "My Trips",
            match &*trips.read_unchecked() {
                None => rsx!(
                    span { class: "loading loading-spinner" }
                ),
                Some(Err(e)) => {
                    tracing::error!("Failed to load trips: {}", e);

                    rsx!(p { class: "text-red-700", "Your trips could not be loaded." })
                }
                Some(Ok(trips)) if trips.is_empty() => rsx!(
                    div { class: "flex flex-col items-start gap-4",
                        p { class: "text-gray-500", "You have no active trips." }
                        Link { to: Route::PlanTrip {}, class: "btn btn-primary", "Plan a Trip" }
                    }
                ),
                Some(Ok(trips)) => rsx!(
                    div { class: "flex flex-wrap gap-4",
                        for trip in trips.iter().cloned() {
                            TripCard { key: "{trip.id}", trip, show_status_message: true }
                        }
                    }
                ),
            }
        }
    )
}
