use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::notice::{IntoNotice, Notice};

/// Validation failures of the account and admin editing forms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Required field {0} is blank")]
    MissingField(&'static str),
    #[error("Field {field} must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Password confirmation does not match")]
    PasswordMismatch,
    #[error("The form is already being saved")]
    SaveInFlight,
}

impl IntoNotice for FormError {
    fn into_notice(self) -> Notice {
        tracing::debug!("{}", self);

        match self {
            Self::MissingField(field) => Notice::error(format!("{} is required.", field)),
            Self::InvalidField { field, expected } => {
                Notice::error(format!("{} must be {}.", field, expected))
            }
            Self::PasswordMismatch => Notice::error("Passwords do not match!"),
            Self::SaveInFlight => Notice::info("Your changes are already being saved."),
        }
    }
}
