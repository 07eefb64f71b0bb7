use dioxus::prelude::*;

use crate::{
    chat::LocalMessageStore,
    client::{
        components::Toasts,
        router::Route,
        store::{notice::NoticeQueue, session::restore_identity},
    },
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Application root.
///
/// The [`Config`](crate::config::Config) is injected at launch; the identity, the toast
/// queue and the chat message store are created here and shared through context.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(restore_identity()));
    use_context_provider(|| Signal::new(NoticeQueue::default()));
    use_context_provider(LocalMessageStore::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
        Toasts {}
    }
}
