use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    catalog::{add_to_dream_list, DestinationCatalog},
    client::{
        components::{DestinationCard, Page},
        store::{
            notice::use_notices,
            session::{use_api, use_identity},
        },
    },
    listing::editor::{ACTIVITIES, DESTINATION_TYPES, PROVINCES},
    model::notice::Notice,
};

/// Select narrowing the catalog by one attribute, the empty option clears it
#[component]
fn FilterSelect(
    label: &'static str,
    options: Vec<&'static str>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx!(
        select {
            class: "select select-bordered",
            value: "{value}",
            onchange: move |evt| on_change.call(evt.value()),
            option { value: "", "All {label}" }
            for option in options {
                option { key: "{option}", value: "{option}", "{option}" }
            }
        }
    )
}

#[component]
pub fn TouristDestinations() -> Element {
    let api = use_api();
    let identity = use_identity();
    let mut notices = use_notices();
    let mut catalog = use_signal(DestinationCatalog::default);

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let result = load_api.list_destinations().await;
            if let Some(notice) = catalog.write().apply(result) {
                notices.write().push(notice);
            }
        })
    });

    let add = use_callback(move |destination_id: i64| {
        let api = api.clone();
        let Some(tourist_id) = identity.read().user_id() else {
            notices
                .write()
                .push(Notice::error("Please sign in to build your Dream List."));
            return;
        };
        let destination = catalog
            .read()
            .destinations
            .iter()
            .find(|d| d.id == destination_id)
            .cloned();
        let Some(destination) = destination else {
            return;
        };
        if !catalog.write().begin_add(destination_id) {
            return;
        }

        spawn(async move {
            let notice = add_to_dream_list(&api, tourist_id, &destination).await;
            catalog.write().finish_add();
            notices.write().push(notice);
        });
    });

    let current = catalog.read().clone();
    let visible: Vec<_> = current.visible().into_iter().cloned().collect();

    rsx!(
        Title { "Destinations | The Pearl" }
        Page { title: "Destinations",
            div { class: "flex flex-wrap gap-4 mb-6",
                FilterSelect {
                    label: "types",
                    options: DESTINATION_TYPES.to_vec(),
                    value: current.filter.kind.clone(),
                    on_change: move |kind| catalog.write().filter.kind = kind,
                }
                FilterSelect {
                    label: "provinces",
                    options: PROVINCES.to_vec(),
                    value: current.filter.province.clone(),
                    on_change: move |province| catalog.write().filter.province = province,
                }
                FilterSelect {
                    label: "activities",
                    options: ACTIVITIES.to_vec(),
                    value: current.filter.activity.clone(),
                    on_change: move |activity| catalog.write().filter.activity = activity,
                }
            }
            if current.loading {
                span { class: "loading loading-spinner" }
            } else if current.failed {
                p { class: "text-red-700", "Destinations could not be loaded." }
            } else if visible.is_empty() {
                p { class: "text-gray-500", "No destinations match your filters." }
            } else {
                div { class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6",
                    for destination in visible {
                        DestinationCard {
                            key: "{destination.id}",
                            adding: current.is_adding(destination.id),
                            on_add: add,
                            destination,
                        }
                    }
                }
            }
        }
    )
}
