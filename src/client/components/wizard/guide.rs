use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPhone};
use dioxus_free_icons::Icon;

use super::{flush_notices, StepNavigation};
use crate::{
    client::{
        components::StarRatingDisplay,
        store::{notice::use_notices, session::use_api},
    },
    directory::{reputation, GuideDirectory},
    wizard::TripWizard,
};

#[component]
pub fn GuideStep(mut wizard: Signal<TripWizard>) -> Element {
    let api = use_api();
    let notices = use_notices();

    use_hook(move || {
        spawn(async move {
            wizard.write().begin_guides();
            let result = GuideDirectory::fetch(&api).await;
            let _ = wizard.write().apply_guides(result);
            flush_notices(wizard, notices);
        })
    });

    let directory = wizard.read().guides().clone();
    let selected = wizard
        .read()
        .form()
        .selected_guide
        .as_ref()
        .map(|guide| guide.id);

    rsx!(
        h2 { class: "text-xl font-semibold mb-4", "Choose Your Tour Guide" }
        match directory {
            GuideDirectory::Loading => rsx!(
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner" }
                }
            ),
            GuideDirectory::Failed(_) => rsx!(
                p { class: "text-red-700", "Tour guides could not be loaded." }
            ),
            GuideDirectory::Loaded(guides) => rsx!(
                if guides.is_empty() {
                    p { class: "text-gray-500", "No tour guides are available right now." }
                }
                div { class: "grid md:grid-cols-3 gap-4",
                    for guide in guides {
                        div {
                            key: "{guide.id}",
                            class: if selected == Some(guide.id) {
                                "card shadow-sm border-2 border-violet-600"
                            } else {
                                "card shadow-sm"
                            },
                            div { class: "card-body",
                                h3 { class: "card-title", "{guide.name}" }
                                StarRatingDisplay { reputation: reputation(&guide) }
                                p { class: "text-sm text-gray-500", "{guide.address}" }
                                div { class: "flex items-center gap-2 text-sm",
                                    Icon { width: 12, height: 12, icon: FaPhone }
                                    "{guide.telephone}"
                                }
                                button {
                                    class: "btn btn-primary btn-sm",
                                    onclick: move |_| {
                                        let _ = wizard.write().select_guide(guide.id);
                                        flush_notices(wizard, notices);
                                    },
                                    if selected == Some(guide.id) {
                                        Icon { width: 12, height: 12, icon: FaCheck }
                                        "Selected"
                                    } else {
                                        "Select"
                                    }
                                }
                            }
                        }
                    }
                }
            ),
        }
        StepNavigation { wizard }
    )
}
