use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHeart, FaLocationDot};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    catalog::add_to_dream_list,
    client::{
        components::Page,
        router::Route,
        store::{
            notice::use_notices,
            session::{use_api, use_identity},
        },
    },
    model::notice::Notice,
};

#[component]
pub fn DestinationDetail(id: i64) -> Element {
    let api = use_api();
    let identity = use_identity();
    let mut notices = use_notices();
    let mut adding = use_signal(|| false);

    let fetch_api = api.clone();
    let destination = use_resource(move || {
        let api = fetch_api.clone();

        async move { api.get_destination(id).await }
    });

    let add = use_callback(move |_: ()| {
        let api = api.clone();
        let loaded = match &*destination.read() {
            Some(Ok(destination)) => Some(destination.clone()),
            _ => None,
        };
        let Some(destination) = loaded else {
            return;
        };
        let Some(tourist_id) = identity.read().user_id() else {
            notices
                .write()
                .push(Notice::error("Please sign in to build your Dream List."));
            return;
        };
        if adding() {
            return;
        }
        adding.set(true);

        spawn(async move {
            let notice = add_to_dream_list(&api, tourist_id, &destination).await;
            adding.set(false);
            notices.write().push(notice);
        });
    });

    let title = match &*destination.read_unchecked() {
        Some(Ok(destination)) => format!("{} | The Pearl", destination.name),
        _ => "Destination | The Pearl".to_string(),
    };

    rsx!(
        Title { "{title}" }
        Page {
            match &*destination.read_unchecked() {
                None => rsx!(
                    span { class: "loading loading-spinner" }
                ),
                Some(Err(e)) => {
                    tracing::warn!(destination_id = %id, "Failed to load destination: {}", e);

                    rsx!(
                        div { class: "flex flex-col items-start gap-4",
                            p { class: "text-red-700", "This destination could not be found." }
                            Link { to: Route::TouristDestinations {}, class: "btn btn-outline", "Back to destinations" }
                        }
                    )
                }
                Some(Ok(destination)) => rsx!(
                    div { class: "flex flex-col gap-6 max-w-256",
                        div { class: "flex justify-between items-center",
                            div {
                                h1 { class: "text-4xl font-bold text-violet-700", "{destination.name}" }
                                div { class: "flex items-center gap-2 text-gray-500",
                                    Icon { width: 14, height: 14, icon: FaLocationDot }
                                    p { "{destination.district}, {destination.province} Province" }
                                }
                            }
                            button {
                                class: "btn btn-primary flex gap-2",
                                disabled: adding(),
                                onclick: move |_| add.call(()),
                                Icon { width: 14, height: 14, icon: FaHeart }
                                if adding() { "Adding..." } else { "Add to Dream List" }
                            }
                        }
                        if !destination.image.is_empty() {
                            img { class: "rounded-xl w-full object-cover max-h-128", src: "{destination.image}", alt: "{destination.name}" }
                        }
                        div { class: "flex flex-wrap gap-2",
                            span { class: "badge badge-primary", "{destination.kind}" }
                            span { class: "badge badge-outline", "{destination.climate} climate" }
                            for activity in destination.activities.iter() {
                                span { key: "{activity}", class: "badge badge-ghost", "{activity}" }
                            }
                        }
                        for (index, paragraph) in destination.details.iter().enumerate() {
                            p { key: "{index}", class: "text-gray-700", "{paragraph}" }
                        }
                    }
                ),
            }
        }
    )
}
