use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{
    notice::{IntoNotice, Notice},
    user::Role,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdentityError {
    #[error("No access token is present")]
    MissingToken,
    #[error("Access token is not a well-formed JWT: {0}")]
    MalformedToken(String),
    #[error("Access token claims could not be decoded: {0}")]
    InvalidClaims(String),
    #[error("Operation requires a signed in user")]
    Unauthenticated,
    #[error("Operation requires role {expected} but the signed in user is {actual}")]
    WrongRole { expected: Role, actual: Role },
}

impl IntoNotice for IdentityError {
    fn into_notice(self) -> Notice {
        tracing::debug!("{}", self);

        match self {
            Self::WrongRole { .. } => Notice::error("You do not have access to this action."),
            _ => Notice::error("Please sign in to continue."),
        }
    }
}
