use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use super::{editor::TourGuideEditor, listing_view, use_listing};
use crate::{
    client::{
        components::Page,
        store::{notice::use_notices, session::use_api},
    },
    listing::{
        editor::{Editor, TourGuideForm, TourGuidePayload},
        schema,
    },
    model::notice::{IntoNotice, Notice},
};

#[component]
pub fn AdminTourGuides() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut editor = use_signal(Editor::<TourGuideForm>::default);

    let fetch_api = api.clone();
    let (mut listing, reload) = use_listing(schema::tour_guides, move || {
        let api = fetch_api.clone();

        async move { api.list_tour_guides().await }
    });

    let edit = use_callback(move |guide_id: i64| {
        if let Some(guide) = listing.read().find(guide_id) {
            editor.write().open_edit(guide);
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
            let result = match &payload {
                TourGuidePayload::Register(registration) => api.register_tour_guide(registration).await,
                TourGuidePayload::Update { user_id, profile } => {
                    api.update_tour_guide_profile(*user_id, profile).await
                }
            };
            let saved = result.is_ok();
            let notice = editor.write().finish_save(target, result);
            notices.write().push(notice);
            if saved {
                reload.call(());
            }
        });
    });

    let delete = use_callback(move |guide_id: i64| {
        let api = api.clone();

        spawn(async move {
            match api.delete_tour_guide(guide_id).await {
                Ok(()) => {
                    listing.write().remove(guide_id);
                    notices.write().push(Notice::success("Tour guide deleted!"));
                }
                Err(e) => {
                    tracing::warn!(guide_id = %guide_id, "Failed to delete tour guide: {}", e);
                    notices.write().push(e.into_notice());
                }
            }
        });
    });

    rsx!(
        Title { "Tour Guides | The Pearl" }
        Page { title: "Tour Guides",
            div { class: "flex justify-end mb-4",
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| editor.write().open_new(),
                    Icon { width: 12, height: 12, icon: FaPlus }
                    "Add Tour Guide"
                }
            }
            {listing_view(listing, Some(edit), Some(delete))}
            TourGuideEditor { editor, on_submit: save }
        }
    )
}
