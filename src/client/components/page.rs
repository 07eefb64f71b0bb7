use dioxus::prelude::*;

/// Content area below the fixed navbar, optionally headed by a title
#[component]
pub fn Page(title: Option<String>, class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            if let Some(title) = title {
                h1 { class: "text-2xl font-semibold mb-4",
                    "{title}"
                }
            }
            {children}
        }
    )
}
