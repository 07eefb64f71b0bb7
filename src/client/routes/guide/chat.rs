use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::components::{ChatPanel, Page},
    model::chat::ChatPartner,
};

fn tourist_contacts() -> Vec<ChatPartner> {
    [
        ("tourist_1", "Frank Paul", "Russia"),
        ("tourist_2", "John Doe", "England"),
        ("tourist_3", "Deepak Singh", "India"),
    ]
    .into_iter()
    .map(|(id, name, country)| ChatPartner {
        id: id.to_string(),
        name: name.to_string(),
        details: Some(country.to_string()),
    })
    .collect()
}

#[component]
pub fn GuideChat() -> Element {
    rsx!(
        Title { "Chat | The Pearl" }
        Page {
            ChatPanel { contacts: tourist_contacts(), contact_list_title: "Tourists Chat" }
        }
    )
}
