use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            wizard::{
                ConfirmStep, DestinationsStep, GuideStep, InformationStep, StepIndicator,
                SuccessStep,
            },
            Page,
        },
        store::session::use_identity,
    },
    wizard::{step::WizardStep, TripWizard},
};

#[component]
pub fn PlanTrip() -> Element {
    let identity = use_identity();
    let wizard = use_signal(|| TripWizard::new(identity.read().clone()));

    let step = wizard.read().step();

    rsx!(
        Title { "Plan a Trip | The Pearl" }
        Page { title: "Plan Your Trip",
            div { class: "max-w-256 mx-auto",
                StepIndicator { current: step }
                match step {
                    WizardStep::SelectDestinations => rsx!(DestinationsStep { wizard }),
                    WizardStep::FillInformation => rsx!(InformationStep { wizard }),
                    WizardStep::SelectGuide => rsx!(GuideStep { wizard }),
                    WizardStep::ConfirmTrip => rsx!(ConfirmStep { wizard }),
                    WizardStep::Success => rsx!(SuccessStep {}),
                }
            }
        }
    )
}
