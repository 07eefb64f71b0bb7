use dioxus::prelude::*;

use crate::{
    client::store::notice::{toast_timeout, use_notices},
    model::notice::{Notice, NoticeLevel},
};

/// Stack of transient notices in the corner of the screen
#[component]
pub fn Toasts() -> Element {
    let notices = use_notices();

    rsx!(
        div { class: "toast-stack",
            for (id, notice) in notices.read().items.iter().cloned() {
                Toast { key: "{id}", id, notice }
            }
        }
    )
}

#[component]
fn Toast(id: u64, notice: Notice) -> Element {
    let mut notices = use_notices();

    // Dismiss on its own once the display time is over
    use_hook(move || {
        spawn(async move {
            toast_timeout().await;
            notices.write().dismiss(id);
        })
    });

    let level = match notice.level {
        NoticeLevel::Info => "toast-info",
        NoticeLevel::Success => "toast-success",
        NoticeLevel::Error => "toast-error",
    };

    rsx!(
        div {
            class: "toast {level}",
            onclick: move |_| notices.write().dismiss(id),
            "{notice.message}"
        }
    )
}
