use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;
use futures::StreamExt;

use crate::{
    chat::{ChatWindow, LocalMessageStore, MessageStream},
    client::store::{notice::use_notices, session::use_identity},
    error::chat::ChatError,
    model::{chat::ChatPartner, notice::IntoNotice},
};

/// Contact list with the conversation of the selected contact
#[component]
pub fn ChatPanel(contacts: Vec<ChatPartner>, contact_list_title: String) -> Element {
    let identity = use_identity();
    let store = use_context::<LocalMessageStore>();
    let mut notices = use_notices();

    let mut window = use_signal(|| ChatWindow::new(&identity.read(), contacts.clone()).ok());
    let mut draft = use_signal(String::new);

    // Re-subscribe only when the open thread changes, the old feed is dropped with its future
    let thread = use_memo(move || window.read().as_ref().and_then(ChatWindow::thread_id));
    let feed_store = store.clone();
    let _feed = use_resource(move || {
        let store = feed_store.clone();

        async move {
            let Some(thread_id) = thread() else {
                return;
            };

            match store.subscribe(&thread_id) {
                Ok(mut subscription) => {
                    while let Some(message) = subscription.next().await {
                        if let Some(window) = window.write().as_mut() {
                            window.receive(message);
                        }
                    }
                }
                Err(e) => {
                    notices.write().push(e.into_notice());
                }
            }
        }
    });

    let send = move |evt: FormEvent| {
        evt.prevent_default();

        let text = draft();
        let composed = match window.read().as_ref() {
            Some(window) => window.compose(&text),
            None => Err(ChatError::NotSignedIn),
        };

        match composed {
            Ok(([me, partner], message)) => {
                let store = store.clone();

                spawn(async move {
                    match store.send([me.as_str(), partner.as_str()], message).await {
                        Ok(_) => draft.set(String::new()),
                        Err(e) => {
                            notices.write().push(e.into_notice());
                        }
                    }
                });
            }
            Err(e) => {
                notices.write().push(e.into_notice());
            }
        }
    };

    let Some(current) = window.read().clone() else {
        return rsx!(
            p { class: "text-gray-500", "Please sign in to use chat." }
        );
    };

    rsx!(
        div { class: "flex gap-4 h-[70vh]",
            div { class: "w-64 border-r pr-4",
                h2 { class: "text-lg font-semibold mb-2", "{contact_list_title}" }
                for contact in current.contacts().iter().cloned() {
                    button {
                        key: "{contact.id}",
                        class: if current.selected().is_some_and(|s| s.id == contact.id) {
                            "w-full text-left p-4 rounded-lg bg-violet-100 text-violet-800 font-semibold"
                        } else {
                            "w-full text-left p-4 rounded-lg hover:bg-gray-100"
                        },
                        onclick: {
                            let partner_id = contact.id.clone();
                            move |_| {
                                if let Some(window) = window.write().as_mut() {
                                    window.select(&partner_id);
                                }
                            }
                        },
                        "{contact.name}"
                    }
                }
            }
            div { class: "flex-1 flex flex-col",
                if let Some(partner) = current.selected() {
                    h3 { class: "text-xl font-semibold mb-2",
                        "Chat with {partner.name}"
                        if let Some(details) = &partner.details {
                            " from {details}"
                        }
                    }
                    div { class: "flex-1 overflow-y-auto flex flex-col gap-2",
                        for message in current.messages().iter() {
                            div {
                                key: "{message.id}",
                                class: if current.is_own(message) {
                                    "chat-bubble-own rounded-lg p-2 max-w-md"
                                } else {
                                    "chat-bubble-other rounded-lg p-2 max-w-md"
                                },
                                p { class: "text-xs opacity-70", "{message.sender_name}" }
                                p { "{message.text}" }
                                p { class: "text-xs opacity-60",
                                    {message.sent_at.format("%H:%M").to_string()}
                                }
                            }
                        }
                    }
                    form { class: "flex gap-2 mt-2",
                        onsubmit: send,
                        input {
                            class: "input input-bordered flex-1",
                            placeholder: "Type a message...",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit",
                            Icon { width: 16, height: 16, icon: FaPaperPlane }
                        }
                    }
                } else {
                    p { class: "text-gray-500", "Select a contact to start chatting." }
                }
            }
        }
    )
}
