//! One-to-one chat between tourists and tour guides.
//!
//! Messages flow through a [`MessageStream`]. The crate ships [`LocalMessageStore`], an
//! in-memory implementation used until a remote store is configured.

pub mod store;
pub mod window;

use std::{
    pin::Pin,
    task::{Context, Poll},
};

use async_trait::async_trait;
use futures::{channel::mpsc, Stream};

use crate::{
    error::chat::ChatError,
    model::chat::{ChatMessage, ChatThread, OutgoingMessage},
};

pub use store::LocalMessageStore;
pub use window::ChatWindow;

/// Identifier of the thread between two participants, independent of their order
pub fn thread_id(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    format!("{}_{}", first, second)
}

/// Live feed of one thread's messages.
///
/// The feed yields the thread's history first and then new messages as they are sent,
/// in `(sent_at, sequence)` order. Dropping it unsubscribes.
pub struct Subscription {
    thread_id: String,
    receiver: mpsc::UnboundedReceiver<ChatMessage>,
}

impl Subscription {
    pub fn new(thread_id: impl Into<String>, receiver: mpsc::UnboundedReceiver<ChatMessage>) -> Self {
        Self {
            thread_id: thread_id.into(),
            receiver,
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }
}

impl Stream for Subscription {
    type Item = ChatMessage;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

/// Transport of chat messages
#[async_trait(?Send)]
pub trait MessageStream {
    /// Subscribe to the messages of a thread
    fn subscribe(&self, thread_id: &str) -> Result<Subscription, ChatError>;

    /// Append a message to the thread between `participants`, creating the thread on
    /// first use
    async fn send(
        &self,
        participants: [&str; 2],
        message: OutgoingMessage,
    ) -> Result<ChatMessage, ChatError>;

    /// Summary of a thread, `None` when nothing has been sent yet
    fn thread(&self, thread_id: &str) -> Option<ChatThread>;
}
