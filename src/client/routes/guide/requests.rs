use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{Page, TripCard},
        store::{
            notice::use_notices,
            session::{use_api, use_identity},
        },
    },
    model::{notice::Notice, trip::TripStatus},
    requests::TripRequests,
};

#[component]
pub fn TourRequests() -> Element {
    let api = use_api();
    let identity = use_identity();
    let mut notices = use_notices();
    let mut requests = use_signal(TripRequests::default);

    // The guide's id is the account's user id
    let tour_guide_id = identity.read().user_id();

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let Some(tour_guide_id) = tour_guide_id else {
                notices
                    .write()
                    .push(Notice::error("Please sign in to see tour requests."));
                return;
            };

            let load = TripRequests::fetch(&load_api, tour_guide_id).await;
            let failed = requests.write().apply(load);
            notices.write().extend(failed);
        })
    });

    let decide = use_callback(move |(trip_id, status): (i64, TripStatus)| {
        let api = api.clone();

        let started = requests.write().begin_decision(trip_id, &status);
        let Some(trip_id) = started else {
            return;
        };

        spawn(async move {
            let result = api.update_trip_status(trip_id, status.clone()).await;
            let notice = requests.write().apply_decision(trip_id, &status, result);
            notices.write().push(notice);
        });
    });

    let current = requests.read().clone();

    rsx!(
        Title { "Tour Requests | The Pearl" }
        Page { title: "Tour Requests",
            if current.has_active_trip {
                div { class: "alert alert-info mb-4",
                    "You are leading a trip right now. New requests can be accepted once it is over."
                }
            }
            if current.loading {
                span { class: "loading loading-spinner" }
            } else if current.pending.is_empty() {
                p { class: "text-gray-500", "No pending tour requests." }
            } else {
                div { class: "flex flex-wrap gap-4",
                    for trip in current.pending.iter().cloned() {
                        TripCard { key: "{trip.id}", trip: trip.clone(),
                            button {
                                class: "btn btn-outline btn-error btn-sm",
                                disabled: current.deciding.is_some(),
                                onclick: move |_| decide.call((trip.id, TripStatus::Rejected)),
                                "Reject"
                            }
                            button {
                                class: "btn btn-primary btn-sm",
                                disabled: !current.can_accept(),
                                onclick: move |_| decide.call((trip.id, TripStatus::Accepted)),
                                if current.deciding == Some(trip.id) { "Sending..." } else { "Accept" }
                            }
                        }
                    }
                }
            }
        }
    )
}
