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
    model::{notice::Notice, trip::PaymentStatus},
    requests::tours::{next_status, ActiveTours as TourBoard},
};

#[component]
pub fn ActiveTours() -> Element {
    let api = use_api();
    let identity = use_identity();
    let mut notices = use_notices();
    let mut tours = use_signal(TourBoard::default);

    let tour_guide_id = identity.read().user_id();

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let Some(tour_guide_id) = tour_guide_id else {
                notices
                    .write()
                    .push(Notice::error("Please sign in to see your tours."));
                return;
            };

            let load = TourBoard::fetch(&load_api, tour_guide_id).await;
            let failed = tours.write().apply(load);
            notices.write().extend(failed);
        })
    });

    let status_api = api.clone();
    let advance = use_callback(move |trip_id: i64| {
        let api = status_api.clone();
        let Some(status) = tours.write().begin_status(trip_id) else {
            return;
        };

        spawn(async move {
            let result = api.update_trip_status(trip_id, status.clone()).await;
            let notice = tours.write().finish_status(trip_id, status, result);
            notices.write().push(notice);
        });
    });

    let mark_paid = use_callback(move |trip_id: i64| {
        let api = api.clone();
        if !tours.write().begin_payment(trip_id) {
            return;
        }

        spawn(async move {
            let result = api.update_payment_status(trip_id, PaymentStatus::Paid).await;
            let notice = tours.write().finish_payment(trip_id, result);
            notices.write().push(notice);
        });
    });

    let current = tours.read().clone();

    rsx!(
        Title { "Active Tours | The Pearl" }
        Page { title: "Active Tours",
            if current.loading {
                span { class: "loading loading-spinner" }
            } else if current.trips.is_empty() {
                p { class: "text-gray-500", "You have no accepted or started trips." }
            } else {
                div { class: "flex flex-wrap gap-4",
                    for trip in current.trips.iter().cloned() {
                        TripCard { key: "{trip.id}", trip: trip.clone(),
                            span { class: "badge badge-outline", "Payment: {trip.payment_status}" }
                            if trip.payment_status != PaymentStatus::Paid {
                                button {
                                    class: "btn btn-outline btn-sm",
                                    disabled: current.is_updating(trip.id),
                                    onclick: move |_| mark_paid.call(trip.id),
                                    "Mark as Paid"
                                }
                            }
                            if let Some(next) = next_status(&trip.trip_status) {
                                button {
                                    class: "btn btn-primary btn-sm",
                                    disabled: current.is_updating(trip.id),
                                    onclick: move |_| advance.call(trip.id),
                                    if current.is_updating(trip.id) { "Sending..." } else { "Mark as {next}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
