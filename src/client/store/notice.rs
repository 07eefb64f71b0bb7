use dioxus::prelude::*;

use crate::model::notice::Notice;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Notices waiting to be shown as toasts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u64,
    pub items: Vec<(u64, Notice)>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, notice));

        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }
}

impl Extend<Notice> for NoticeQueue {
    fn extend<I: IntoIterator<Item = Notice>>(&mut self, notices: I) {
        for notice in notices {
            self.push(notice);
        }
    }
}

pub fn use_notices() -> Signal<NoticeQueue> {
    use_context::<Signal<NoticeQueue>>()
}

/// Wait out a toast's display time, browsers only
#[cfg(feature = "web")]
pub async fn toast_timeout() {
    gloo::timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
}

#[cfg(not(feature = "web"))]
pub async fn toast_timeout() {
    futures::future::pending::<()>().await;
}
