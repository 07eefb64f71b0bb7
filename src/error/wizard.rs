use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::notice::{IntoNotice, Notice},
    wizard::{form::FormField, step::WizardStep},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    #[error("No destinations are selected")]
    EmptySelection,
    #[error("Tourist already has an active trip")]
    ActiveTripExists,
    #[error("Required field {0} is blank")]
    MissingField(FormField),
    #[error("Field {field} must be {expected}")]
    InvalidField {
        field: FormField,
        expected: &'static str,
    },
    #[error("No tour guide is selected")]
    NoGuideSelected,
    #[error("Tour guide {0} is not present in the guide directory")]
    UnknownGuide(i64),
    #[error("A trip submission is already in flight")]
    SubmissionInFlight,
    #[error("A change to the selected destinations is still being saved")]
    SelectionSaveInFlight,
    #[error("Cannot {action} while at step {step}")]
    InvalidTransition {
        step: WizardStep,
        action: &'static str,
    },
}

impl IntoNotice for WizardError {
    fn into_notice(self) -> Notice {
        tracing::debug!("{}", self);

        match self {
            Self::EmptySelection => Notice::error("Please select at least one destination."),
            Self::ActiveTripExists => {
                Notice::error("You already have an active trip, a new one can be planned once it ends.")
            }
            Self::MissingField(_) => Notice::error("Please fill in all required fields."),
            Self::InvalidField { field, expected } => {
                Notice::error(format!("{} must be {}.", field, expected))
            }
            Self::NoGuideSelected => Notice::error("A tour guide must be selected."),
            Self::UnknownGuide(_) => Notice::error("That tour guide is no longer available."),
            Self::SubmissionInFlight => Notice::info("Your trip request is already being sent."),
            Self::SelectionSaveInFlight => {
                Notice::info("Please wait until your selection has been saved.")
            }
            Self::InvalidTransition { .. } => Notice::error("That action is not available right now."),
        }
    }
}
