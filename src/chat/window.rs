use crate::{
    chat::thread_id,
    error::chat::ChatError,
    model::chat::{ChatMessage, ChatPartner, OutgoingMessage},
    session::Identity,
};

/// State of the chat page: contacts, the open conversation and its messages
#[derive(Clone, Debug, PartialEq)]
pub struct ChatWindow {
    user_id: String,
    user_name: String,
    contacts: Vec<ChatPartner>,
    selected: Option<ChatPartner>,
    messages: Vec<ChatMessage>,
}

impl ChatWindow {
    /// Open the chat window for a signed in user, selecting the first contact
    pub fn new(identity: &Identity, contacts: Vec<ChatPartner>) -> Result<Self, ChatError> {
        let session = identity.session().ok_or(ChatError::NotSignedIn)?;

        let mut window = Self {
            user_id: session.user_id.to_string(),
            user_name: session.user_name.clone(),
            contacts,
            selected: None,
            messages: Vec::new(),
        };
        window.selected = window.contacts.first().cloned();

        Ok(window)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn contacts(&self) -> &[ChatPartner] {
        &self.contacts
    }

    pub fn selected(&self) -> Option<&ChatPartner> {
        self.selected.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_own(&self, message: &ChatMessage) -> bool {
        message.sender_id == self.user_id
    }

    /// Thread of the open conversation
    pub fn thread_id(&self) -> Option<String> {
        self.selected
            .as_ref()
            .map(|partner| thread_id(&self.user_id, &partner.id))
    }

    /// Replace the contact list, selecting the first contact when none is selected
    pub fn set_contacts(&mut self, contacts: Vec<ChatPartner>) {
        self.contacts = contacts;

        if self.selected.is_none() {
            self.selected = self.contacts.first().cloned();
        }
    }

    /// Open the conversation with a contact.
    ///
    /// Returns the thread to subscribe to when the selection changed; the message list is
    /// emptied so the new subscription can replay the thread's history.
    pub fn select(&mut self, partner_id: &str) -> Option<String> {
        if self.selected.as_ref().is_some_and(|p| p.id == partner_id) {
            return None;
        }

        let partner = self.contacts.iter().find(|p| p.id == partner_id)?.clone();
        self.selected = Some(partner);
        self.messages.clear();

        self.thread_id()
    }

    /// Prepare a message for the open conversation
    pub fn compose(&self, text: &str) -> Result<([String; 2], OutgoingMessage), ChatError> {
        let partner = self.selected.as_ref().ok_or(ChatError::NoPartnerSelected)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::BlankMessage);
        }

        Ok((
            [self.user_id.clone(), partner.id.clone()],
            OutgoingMessage {
                text: text.to_string(),
                sender_id: self.user_id.clone(),
                sender_name: self.user_name.clone(),
            },
        ))
    }

    /// Add a delivered message, keeping the list ordered and free of duplicates
    pub fn receive(&mut self, message: ChatMessage) {
        if self.messages.iter().any(|m| m.id == message.id) {
            return;
        }

        let key = message.order_key();
        match self.messages.last() {
            Some(last) if last.order_key() > key => {
                let index = self.messages.partition_point(|m| m.order_key() <= key);
                self.messages.insert(index, message);
            }
            _ => self.messages.push(message),
        }
    }
}
