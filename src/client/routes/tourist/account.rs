use chrono::Utc;
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFloppyDisk, FaPen, FaXmark};
use dioxus_free_icons::Icon;

use crate::{
    account::profile::{ProfileForm, TouristAccount as AccountState},
    client::{
        components::{Page, TripCard},
        store::{
            notice::use_notices,
            session::{use_api, use_identity},
        },
    },
    model::notice::{IntoNotice, Notice},
};

/// A labelled profile value, editable while `on_input` is present
#[component]
fn DetailField(
    label: &'static str,
    value: String,
    kind: Option<&'static str>,
    on_input: Option<EventHandler<String>>,
) -> Element {
    rsx!(
        label { class: "form-control",
            span { class: "label-text text-gray-500", "{label}" }
            if let Some(on_input) = on_input {
                input {
                    class: "input input-bordered",
                    r#type: kind.unwrap_or("text"),
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                div { class: "p-2 bg-base-200 rounded-md min-h-[42px]",
                    if value.is_empty() { "N/A" } else { "{value}" }
                }
            }
        }
    )
}

#[component]
pub fn TouristAccount() -> Element {
    let api = use_api();
    let identity = use_identity();
    let mut notices = use_notices();
    let mut account = use_signal(AccountState::default);

    let tourist_id = identity.read().user_id();

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let Some(tourist_id) = tourist_id else {
                notices
                    .write()
                    .push(Notice::error("Please sign in to see your account."));
                return;
            };

            let load = AccountState::fetch(&load_api, tourist_id).await;
            let failed = account.write().apply(load);
            notices.write().extend(failed);
        })
    });

    let save = use_callback(move |_: ()| {
        let api = api.clone();
        let Some(tourist_id) = tourist_id else {
            return;
        };

        let update = match account.write().begin_save() {
            Ok(Some(update)) => update,
            Ok(None) => return,
            Err(e) => {
                notices.write().push(e.into_notice());
                return;
            }
        };

        spawn(async move {
            let result = api.update_tourist_profile(tourist_id, &update).await;
            let notice = account.write().finish_save(update, result);
            notices.write().push(notice);
        });
    });

    let mut edit = move |apply: fn(&mut ProfileForm, String), value: String| {
        if let Some(form) = account.write().editing.as_mut() {
            apply(form, value);
        }
    };

    let current = account.read().clone();
    let age = current
        .age(Utc::now().date_naive())
        .map_or_else(String::new, |age| age.to_string());

    if current.loading {
        return rsx!(
            Page { title: "My Account",
                span { class: "loading loading-spinner" }
            }
        );
    }

    let Some(profile) = current.profile.clone() else {
        return rsx!(
            Title { "My Account | The Pearl" }
            Page { title: "My Account",
                p { class: "text-red-700", "Your profile could not be loaded." }
            }
        );
    };
    let shown = current
        .editing
        .clone()
        .unwrap_or_else(|| ProfileForm::from_profile(&profile));
    let editing = current.editing.is_some();
    let picture = profile
        .profile_picture
        .clone()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| crate::model::tourist::DEFAULT_PROFILE_PICTURE.to_string());

    rsx!(
        Title { "My Account | The Pearl" }
        Page { title: "My Account",
            div { class: "grid lg:grid-cols-3 gap-8",
                section { class: "card shadow-sm lg:col-span-2",
                    div { class: "card-body",
                        div { class: "flex items-center gap-4 mb-4",
                            img { class: "w-20 h-20 rounded-full object-cover", src: "{picture}", alt: "{profile.name}" }
                            div {
                                h2 { class: "text-xl font-semibold", "{profile.name}" }
                                p { class: "text-gray-500", "{profile.email}" }
                            }
                            div { class: "ml-auto flex gap-2",
                                if editing {
                                    button {
                                        class: "btn btn-ghost btn-sm",
                                        disabled: current.is_saving(),
                                        onclick: move |_| account.write().cancel_edit(),
                                        Icon { width: 12, height: 12, icon: FaXmark }
                                        "Cancel"
                                    }
                                    button {
                                        class: "btn btn-primary btn-sm",
                                        disabled: current.is_saving(),
                                        onclick: move |_| save.call(()),
                                        Icon { width: 12, height: 12, icon: FaFloppyDisk }
                                        if current.is_saving() { "Saving..." } else { "Save" }
                                    }
                                } else {
                                    button {
                                        class: "btn btn-outline btn-sm",
                                        onclick: move |_| account.write().begin_edit(),
                                        Icon { width: 12, height: 12, icon: FaPen }
                                        "Edit Profile"
                                    }
                                }
                            }
                        }
                        div { class: "grid md:grid-cols-2 gap-4",
                            DetailField {
                                label: "Name",
                                value: shown.name,
                                on_input: editing.then_some(EventHandler::new(move |v| edit(|f, v| f.name = v, v))),
                            }
                            DetailField {
                                label: "Email",
                                value: shown.email,
                                kind: "email",
                                on_input: editing.then_some(EventHandler::new(move |v| edit(|f, v| f.email = v, v))),
                            }
                            DetailField {
                                label: "Passport Number",
                                value: shown.passport_number,
                                on_input: editing.then_some(EventHandler::new(move |v| edit(|f, v| f.passport_number = v, v))),
                            }
                            DetailField {
                                label: "Country",
                                value: shown.country,
                                on_input: editing.then_some(EventHandler::new(move |v| edit(|f, v| f.country = v, v))),
                            }
                            DetailField {
                                label: "Address",
                                value: shown.address,
                                on_input: editing.then_some(EventHandler::new(move |v| edit(|f, v| f.address = v, v))),
                            }
                            DetailField {
                                label: "Birthday",
                                value: shown.birth_day,
                                kind: "date",
                                on_input: editing.then_some(EventHandler::new(move |v| edit(|f, v| f.birth_day = v, v))),
                            }
                            if !editing {
                                DetailField { label: "Age", value: age }
                            }
                        }
                    }
                }
                section {
                    h2 { class: "text-xl font-semibold mb-4", "Completed Trips" }
                    if current.completed_trips.is_empty() {
                        p { class: "text-gray-500", "No completed trips yet." }
                    }
                    div { class: "flex flex-col gap-4",
                        for trip in current.completed_trips.iter().cloned() {
                            TripCard { key: "{trip.id}", trip }
                        }
                    }
                }
            }
        }
    )
}
