use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash, FaXmark};
use dioxus_free_icons::Icon;

use super::{flush_notices, StepNavigation};
use crate::{
    client::{
        components::TripCard,
        store::{notice::use_notices, session::use_api},
    },
    model::destination::DestinationDto,
    wizard::{board::BoardLoad, TripWizard},
};

#[component]
pub fn DestinationsStep(mut wizard: Signal<TripWizard>) -> Element {
    let api = use_api();
    let notices = use_notices();

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let tourist_id = wizard.write().begin_load();
            if let Ok(tourist_id) = tourist_id {
                let load = BoardLoad::fetch(&load_api, tourist_id).await;
                wizard.write().apply_load(load);
            }
            flush_notices(wizard, notices);
        })
    });

    let add_api = api.clone();
    let add = use_callback(move |destination_id: i64| {
        let api = add_api.clone();
        let change = wizard.write().request_add(destination_id);
        flush_notices(wizard, notices);

        if let Ok(Some(change)) = change {
            spawn(async move {
                let result = api
                    .save_selected_destinations(change.tourist_id, &change.destination_ids)
                    .await;
                let _ = wizard.write().apply_selection(change, result);
                flush_notices(wizard, notices);
            });
        }
    });

    let deselect_api = api.clone();
    let deselect = use_callback(move |destination_id: i64| {
        let api = deselect_api.clone();
        let change = wizard.write().request_remove_selected(destination_id);
        flush_notices(wizard, notices);

        if let Ok(Some(change)) = change {
            spawn(async move {
                let result = api
                    .save_selected_destinations(change.tourist_id, &change.destination_ids)
                    .await;
                let _ = wizard.write().apply_selection(change, result);
                flush_notices(wizard, notices);
            });
        }
    });

    let unwish = use_callback(move |destination_id: i64| {
        let api = api.clone();
        let removal = wizard.write().request_remove_wishlist(destination_id);
        flush_notices(wizard, notices);

        if let Ok(Some(removal)) = removal {
            spawn(async move {
                let result = api
                    .remove_from_wishlist(removal.tourist_id, removal.destination_id)
                    .await;
                let _ = wizard.write().apply_wishlist_removal(removal, result);
                flush_notices(wizard, notices);
            });
        }
    });

    let board = wizard.read().board().clone();
    let saving = wizard.read().is_saving_selection();

    if board.loading {
        return rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner" }
            }
        );
    }

    rsx!(
        if board.is_blocked() {
            div { class: "alert alert-warning mb-4",
                "You already have an active trip. A new trip can be planned once it has ended."
            }
            div { class: "flex flex-wrap gap-4 mb-6",
                for trip in board.active_trips.iter().cloned() {
                    TripCard { key: "{trip.id}", trip, show_status_message: true }
                }
            }
        }
        div { class: "grid md:grid-cols-2 gap-6",
            section {
                h2 { class: "text-xl font-semibold mb-2", "Your Wishlist" }
                if board.wishlist.is_empty() {
                    p { class: "text-gray-500", "Your wishlist is empty." }
                }
                for (selected, destination) in board.wishlist.iter().map(|d| (board.is_selected(d.id), d.clone())) {
                    DestinationRow {
                        key: "{destination.id}",
                        selected,
                        saving,
                        destination,
                        on_add: add,
                        on_remove: unwish,
                    }
                }
            }
            section {
                h2 { class: "text-xl font-semibold mb-2", "Selected Destinations" }
                if board.selected.is_empty() {
                    p { class: "text-gray-500", "Add destinations from your wishlist." }
                }
                for destination in board.selected.iter().cloned() {
                    div { key: "{destination.id}", class: "flex justify-between items-center p-2 border-b",
                        p { "{destination.name}" }
                        button {
                            class: "btn btn-ghost btn-sm",
                            disabled: saving,
                            onclick: move |_| deselect.call(destination.id),
                            Icon { width: 14, height: 14, icon: FaXmark }
                        }
                    }
                }
            }
        }
        StepNavigation {
            wizard,
            next_disabled: board.is_blocked() || saving,
        }
    )
}

#[component]
fn DestinationRow(
    destination: DestinationDto,
    selected: bool,
    saving: bool,
    on_add: Callback<i64>,
    on_remove: Callback<i64>,
) -> Element {
    let id = destination.id;

    rsx!(
        div { class: "flex justify-between items-center p-2 border-b",
            div {
                p { class: "font-medium", "{destination.name}" }
                p { class: "text-sm text-gray-500", "{destination.district}, {destination.province}" }
            }
            div { class: "flex gap-2",
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: saving,
                    onclick: move |_| on_add.call(id),
                    Icon { width: 12, height: 12, icon: FaPlus }
                    if selected { "Selected" } else { "Select" }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_remove.call(id),
                    Icon { width: 12, height: 12, icon: FaTrash }
                }
            }
        }
    )
}
