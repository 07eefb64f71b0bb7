use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl font-semibold", "Page not found" }
            p { class: "text-gray-500", "There is nothing at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back to home" }
        }
    )
}
