//! Error types for the Pearl front-end.
//!
//! Each domain (configuration, remote API, identity, trip wizard, chat, forms) has its own
//! `thiserror` enum. They are aggregated into [`Error`] so `?` works across domains, and
//! each implements [`IntoNotice`] so a failed operation can be reported to the user as a
//! transient notification without leaking transport details.

pub mod api;
pub mod chat;
pub mod config;
pub mod form;
pub mod identity;
pub mod wizard;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    error::{
        api::ApiError, chat::ChatError, config::ConfigError, form::FormError,
        identity::IdentityError, wizard::WizardError,
    },
    model::notice::{IntoNotice, Notice},
};

/// Main error type for the Pearl front-end.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - API errors (transport failure, non-2xx status, malformed payload)
/// - Identity errors (missing or undecodable credential, wrong role)
/// - Wizard errors (client-side validation and step guards)
/// - Chat errors (blank message, no partner selected, closed store)
/// - Form errors (account and admin editing forms)
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    ApiError(#[from] ApiError),
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    #[error(transparent)]
    WizardError(#[from] WizardError),
    #[error(transparent)]
    ChatError(#[from] ChatError),
    #[error(transparent)]
    FormError(#[from] FormError),
}

impl IntoNotice for Error {
    fn into_notice(self) -> Notice {
        match self {
            Self::ConfigError(err) => err.into_notice(),
            Self::ApiError(err) => err.into_notice(),
            Self::IdentityError(err) => err.into_notice(),
            Self::WizardError(err) => err.into_notice(),
            Self::ChatError(err) => err.into_notice(),
            Self::FormError(err) => err.into_notice(),
        }
    }
}

/// Wrapper for errors that should only surface as a generic failure message.
///
/// The full error is logged; the user sees the provided fallback text.
pub struct UnexpectedError<E>(pub E, pub &'static str);

impl<E: std::fmt::Display> IntoNotice for UnexpectedError<E> {
    fn into_notice(self) -> Notice {
        tracing::error!("{}", self.0);

        Notice::error(self.1)
    }
}
