use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Page, TripCard},
        store::session::{use_api, use_identity},
    },
    requests::tours::total_earnings,
};

#[component]
pub fn CompletedTours() -> Element {
    let api = use_api();
    let identity = use_identity();

    let trips = use_resource(move || {
        let api = api.clone();
        let tour_guide_id = identity.read().user_id();

        async move {
            match tour_guide_id {
                Some(tour_guide_id) => api.guide_completed_trips(tour_guide_id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    rsx!(
        Title { "Completed Tours | The Pearl" }
        Page { title: "Completed Tours",
            match &*trips.read_unchecked() {
                None => rsx!(
                    span { class: "loading loading-spinner" }
                ),
                Some(Err(e)) => {
                    tracing::error!("Failed to load completed tours: {}", e);

                    rsx!(p { class: "text-red-700", "Your completed tours could not be loaded." })
                }
                Some(Ok(trips)) if trips.is_empty() => rsx!(
                    p { class: "text-gray-500", "You have not completed any tours yet." }
                ),
                Some(Ok(trips)) => rsx!(
                    div { class: "stats shadow mb-6",
                        div { class: "stat",
                            div { class: "stat-title", "Tours completed" }
                            div { class: "stat-value", "{trips.len()}" }
                        }
                        div { class: "stat",
                            div { class: "stat-title", "Earnings received" }
                            div { class: "stat-value", "{total_earnings(trips):.2}" }
                        }
                    }
                    div { class: "flex flex-wrap gap-4",
                        for trip in trips.iter().cloned() {
                            TripCard { key: "{trip.id}", trip: trip.clone(),
                                span { class: "badge badge-outline", "Payment: {trip.payment_status}" }
                            }
                        }
                    }
                ),
            }
        }
    )
}
