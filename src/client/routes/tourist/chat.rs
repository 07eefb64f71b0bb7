use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::components::{ChatPanel, Page},
    model::chat::ChatPartner,
};

fn guide_contacts() -> Vec<ChatPartner> {
    [("guide_1", "Nimal Perera"), ("guide_2", "Saman Dissanayake")]
        .into_iter()
        .map(|(id, name)| ChatPartner {
            id: id.to_string(),
            name: name.to_string(),
            details: None,
        })
        .collect()
}

#[component]
pub fn TouristChat() -> Element {
    rsx!(
        Title { "Chat | The Pearl" }
        Page {
            ChatPanel { contacts: guide_contacts(), contact_list_title: "Tour Guide Chat" }
        }
    )
}
