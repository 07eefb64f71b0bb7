use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use super::{editor::DestinationEditor, listing_view, use_listing};
use crate::{
    client::{
        components::Page,
        store::{notice::use_notices, session::use_api},
    },
    listing::{
        editor::{DestinationForm, EditTarget, Editor},
        schema,
    },
    model::notice::{IntoNotice, Notice},
};

#[component]
pub fn AdminDestinations() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut editor = use_signal(Editor::<DestinationForm>::default);

    let fetch_api = api.clone();
    let (mut listing, reload) = use_listing(schema::destinations, move || {
        let api = fetch_api.clone();

        async move { api.list_destinations().await }
    });

    let edit = use_callback(move |destination_id: i64| {
        if let Some(destination) = listing.read().find(destination_id) {
            editor.write().open_edit(destination);
        }
    });

    let save_api = api.clone();
    let save = use_callback(move |_: ()| {
        let api = save_api.clone();
        let (target, payload) = match editor.write().begin_save() {
            Ok(Some(save)) => save,
            Ok(None) => return,
            Err(e) => {
                notices.write().push(e.into_notice());
                return;
            }
        };

        spawn(async move {
            let result = match target {
                EditTarget::New => api.create_destination(&payload).await,
                EditTarget::Existing(id) => api.update_destination(id, &payload).await,
            };
            let saved = result.is_ok();
            let notice = editor.write().finish_save(target, result);
            notices.write().push(notice);
            if saved {
                reload.call(());
            }
        });
    });

    let delete = use_callback(move |destination_id: i64| {
        let api = api.clone();

        spawn(async move {
            match api.delete_destination(destination_id).await {
                Ok(()) => {
                    listing.write().remove(destination_id);
                    notices.write().push(Notice::success("Destination deleted!"));
                }
                Err(e) => {
                    tracing::warn!(destination_id = %destination_id, "Failed to delete destination: {}", e);
                    notices.write().push(e.into_notice());
                }
            }
        });
    });

    rsx!(
        Title { "Destinations | The Pearl" }
        Page { title: "Destinations",
            div { class: "flex justify-end mb-4",
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| editor.write().open_new(),
                    Icon { width: 12, height: 12, icon: FaPlus }
                    "Add Destination"
                }
            }
            {listing_view(listing, Some(edit), Some(delete))}
            DestinationEditor { editor, on_submit: save }
        }
    )
}
