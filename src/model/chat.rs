use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Someone the signed in user can chat with
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPartner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// A message as delivered by the message store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sent_at: DateTime<Utc>,
    /// Tie-breaker for messages stamped within the same instant
    pub sequence: u64,
}

impl ChatMessage {
    /// Key messages of a thread are ordered by
    pub fn order_key(&self) -> (DateTime<Utc>, u64) {
        (self.sent_at, self.sequence)
    }
}

/// A message written by the user, before the store stamps it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub sender_id: String,
    pub sender_name: String,
}

/// Summary record of a conversation between two participants
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatThread {
    pub id: String,
    pub participants: Vec<String>,
    pub last_message: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}
