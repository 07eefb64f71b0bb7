use std::{cell::RefCell, collections::HashMap, rc::Rc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use futures::channel::mpsc;

use crate::{
    chat::{thread_id, MessageStream, Subscription},
    error::chat::ChatError,
    model::chat::{ChatMessage, ChatThread, OutgoingMessage},
};

#[derive(Default)]
struct ThreadState {
    thread: Option<ChatThread>,
    messages: Vec<ChatMessage>,
    subscribers: Vec<mpsc::UnboundedSender<ChatMessage>>,
}

#[derive(Default)]
struct StoreState {
    threads: HashMap<String, ThreadState>,
    sequence: u64,
}

/// In-memory message store shared by every clone.
///
/// Each message is stamped with the current time, never earlier than the previous
/// message of its thread, and a store-wide sequence number.
#[derive(Clone, Default)]
pub struct LocalMessageStore {
    state: Rc<RefCell<StoreState>>,
}

impl LocalMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped at `now`
    pub fn publish_at(
        &self,
        participants: [&str; 2],
        message: OutgoingMessage,
        now: DateTime<Utc>,
    ) -> Result<ChatMessage, ChatError> {
        if message.text.trim().is_empty() {
            return Err(ChatError::BlankMessage);
        }

        let id = thread_id(participants[0], participants[1]);
        let mut state = self.state.borrow_mut();
        state.sequence += 1;
        let sequence = state.sequence;

        let thread = state.threads.entry(id.clone()).or_default();
        let sent_at = thread
            .messages
            .last()
            .map_or(now, |last| last.sent_at.max(now));

        let message = ChatMessage {
            id: format!("{}-{}", id, sequence),
            text: message.text,
            sender_id: message.sender_id,
            sender_name: message.sender_name,
            sent_at,
            sequence,
        };

        thread.messages.push(message.clone());
        thread.thread = Some(ChatThread {
            id: id.clone(),
            participants: participants.iter().map(|p| p.to_string()).collect(),
            last_message: Some(message.text.clone()),
            last_updated: Some(sent_at),
        });

        // Dropped subscriptions are pruned here
        thread
            .subscribers
            .retain(|subscriber| subscriber.unbounded_send(message.clone()).is_ok());

        tracing::debug!(
            thread_id = %id,
            sequence = message.sequence,
            subscribers = thread.subscribers.len(),
            "Published chat message"
        );

        Ok(message)
    }
}

#[async_trait(?Send)]
impl MessageStream for LocalMessageStore {
    fn subscribe(&self, thread_id: &str) -> Result<Subscription, ChatError> {
        let (sender, receiver) = mpsc::unbounded();
        let mut state = self.state.borrow_mut();
        let thread = state.threads.entry(thread_id.to_string()).or_default();

        for message in &thread.messages {
            sender
                .unbounded_send(message.clone())
                .map_err(|_| ChatError::StoreClosed(thread_id.to_string()))?;
        }
        thread.subscribers.push(sender);

        Ok(Subscription::new(thread_id, receiver))
    }

    async fn send(
        &self,
        participants: [&str; 2],
        message: OutgoingMessage,
    ) -> Result<ChatMessage, ChatError> {
        self.publish_at(participants, message, Utc::now())
    }

    fn thread(&self, thread_id: &str) -> Option<ChatThread> {
        self.state
            .borrow()
            .threads
            .get(thread_id)
            .and_then(|thread| thread.thread.clone())
    }
}
