use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHeart, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::{client::router::Route, model::destination::DestinationDto};

/// Catalog card linking to the destination's page, with a dream list button when
/// `on_add` is present
#[component]
pub fn DestinationCard(
    destination: DestinationDto,
    adding: Option<bool>,
    on_add: Option<EventHandler<i64>>,
) -> Element {
    let activities = destination
        .activities
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(" · ");
    let adding = adding.unwrap_or(false);
    let destination_id = destination.id;

    rsx!(
        div { class: "card shadow-sm hover:shadow-md transition-shadow",
            Link { to: Route::DestinationDetail { id: destination_id },
                if !destination.image.is_empty() {
                    figure {
                        img { class: "h-48 w-full object-cover", src: "{destination.image}", alt: "{destination.name}" }
                    }
                }
            }
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    Link { to: Route::DestinationDetail { id: destination_id },
                        h2 { class: "card-title", "{destination.name}" }
                    }
                    span { class: "badge badge-outline", "{destination.kind}" }
                }
                div { class: "flex items-center gap-2 text-sm text-gray-500",
                    Icon { width: 12, height: 12, icon: FaLocationDot }
                    p { "{destination.province} Province" }
                }
                p { class: "text-sm", "{activities}" }
                if let Some(on_add) = on_add {
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            disabled: adding,
                            onclick: move |_| on_add.call(destination_id),
                            Icon { width: 12, height: 12, icon: FaHeart }
                            if adding { "Adding..." } else { "Add to Dream List" }
                        }
                    }
                }
            }
        }
    )
}
