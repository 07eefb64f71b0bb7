use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Page, StarRatingDisplay},
        store::session::{use_api, use_identity},
    },
    directory::{reputation, GuideDirectory},
    model::guide::TourGuideDto,
};

#[component]
fn DetailField(label: &'static str, value: String) -> Element {
    rsx!(
        div {
            p { class: "text-sm font-medium text-gray-500 mb-1", "{label}" }
            div { class: "w-full p-3 bg-gray-50 border border-gray-200 rounded-lg min-h-[46px]",
                "{value}"
            }
        }
    )
}

#[component]
fn GuideProfile(guide: TourGuideDto) -> Element {
    rsx!(
        div { class: "card shadow-sm w-full max-w-256",
            div { class: "card-body",
                div { class: "flex items-center gap-4 mb-4",
                    if let Some(picture) = &guide.profile_picture {
                        div { class: "avatar",
                            div { class: "w-24 rounded-full",
                                img { src: "{picture}", alt: "{guide.name}" }
                            }
                        }
                    }
                    div {
                        h2 { class: "card-title", "{guide.name}" }
                        StarRatingDisplay { reputation: reputation(&guide) }
                    }
                }
                div { class: "grid md:grid-cols-2 gap-4",
                    DetailField { label: "Email", value: guide.email.clone().unwrap_or_default() }
                    DetailField { label: "Telephone", value: guide.telephone.clone() }
                    DetailField { label: "Address", value: guide.address.clone() }
                    DetailField { label: "NIC", value: guide.nic.clone() }
                    DetailField { label: "License Number", value: guide.license_number.clone() }
                }
            }
        }
    )
}

#[component]
pub fn GuideAccount() -> Element {
    let api = use_api();
    let identity = use_identity();

    // Profiles are looked up by the account's user id
    let profile = use_resource(move || {
        let api = api.clone();
        let user_id = identity.read().user_id();

        async move {
            let mut directory = GuideDirectory::Loading;
            directory.apply(&GuideDirectory::fetch(&api).await);

            match directory {
                GuideDirectory::Failed(reason) => Err(reason),
                _ => Ok(directory
                    .guides()
                    .iter()
                    .find(|guide| Some(guide.user_id) == user_id)
                    .cloned()),
            }
        }
    });

    rsx!(
        Title { "Account | The Pearl" }
        Page { title: "My Account",
            match &*profile.read_unchecked() {
                None => rsx!(span { class: "loading loading-spinner" }),
                Some(Err(reason)) => {
                    tracing::error!("Failed to load tour guide profile: {}", reason);

                    rsx!(p { class: "text-red-700", "Your profile could not be loaded." })
                }
                Some(Ok(None)) => rsx!(
                    p { class: "text-gray-500", "No tour guide profile is linked to this account." }
                ),
                Some(Ok(Some(guide))) => rsx!(GuideProfile { guide: guide.clone() }),
            }
        }
    )
}
