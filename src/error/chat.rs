use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::notice::{IntoNotice, Notice};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("Message text is blank")]
    BlankMessage,
    #[error("No chat partner is selected")]
    NoPartnerSelected,
    #[error("Chat requires a signed in user")]
    NotSignedIn,
    #[error("Message store for thread {0} is closed")]
    StoreClosed(String),
}

impl IntoNotice for ChatError {
    fn into_notice(self) -> Notice {
        match self {
            Self::BlankMessage => Notice::info("Type a message before sending."),
            Self::NoPartnerSelected => Notice::info("Select a contact to start chatting."),
            Self::NotSignedIn => Notice::error("Please sign in to use chat."),
            Self::StoreClosed(_) => {
                tracing::error!("{}", self);

                Notice::error("Chat is currently unavailable.")
            }
        }
    }
}
