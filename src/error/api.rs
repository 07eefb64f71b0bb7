use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::notice::{IntoNotice, Notice};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Failed to send request to {endpoint}: {reason}")]
    Transport { endpoint: String, reason: String },
    #[error("Request to {endpoint} failed with status {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },
    #[error("Failed to parse response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
    #[error("Failed to encode request body for {endpoint}: {reason}")]
    Encode { endpoint: String, reason: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl IntoNotice for ApiError {
    fn into_notice(self) -> Notice {
        match &self {
            Self::Transport { .. } => {
                tracing::warn!("{}", self);

                Notice::error("Could not reach the server, please check your connection.")
            }
            Self::Status {
                status, message, ..
            } if (400..500).contains(status) => {
                tracing::debug!("{}", self);

                Notice::error(message.clone())
            }
            Self::Status { .. } => {
                tracing::error!("{}", self);

                Notice::error("The server ran into a problem, please try again.")
            }
            Self::Decode { .. } | Self::Encode { .. } => {
                tracing::error!("{}", self);

                Notice::error("An unexpected error occurred.")
            }
        }
    }
}
