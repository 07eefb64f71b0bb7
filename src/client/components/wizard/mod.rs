pub mod confirm;
pub mod destinations;
pub mod guide;
pub mod information;
pub mod success;

pub use confirm::ConfirmStep;
pub use destinations::DestinationsStep;
pub use guide::GuideStep;
pub use information::InformationStep;
pub use success::SuccessStep;

use dioxus::prelude::*;

use crate::{
    client::store::notice::NoticeQueue,
    wizard::{step::WizardStep, TripWizard},
};

/// Move the wizard's pending notices to the toast queue
pub fn flush_notices(mut wizard: Signal<TripWizard>, mut notices: Signal<NoticeQueue>) {
    let drained = wizard.write().take_notices();
    notices.write().extend(drained);
}

#[component]
pub fn StepIndicator(current: WizardStep) -> Element {
    rsx!(
        ol { class: "step-indicator mb-6",
            for step in WizardStep::ALL {
                li {
                    key: "{step.number()}",
                    class: if step == current { "active" } else { "" },
                    "{step.number()}. {step}"
                }
            }
        }
    )
}

#[component]
fn StepNavigation(
    mut wizard: Signal<TripWizard>,
    next_label: Option<String>,
    next_disabled: Option<bool>,
    on_next: Option<EventHandler<()>>,
) -> Element {
    let notices = use_context::<Signal<NoticeQueue>>();
    let step = wizard.read().step();

    rsx!(
        div { class: "flex justify-between mt-6",
            if step.previous().is_some() {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        let _ = wizard.write().back();
                        flush_notices(wizard, notices);
                    },
                    "Back"
                }
            } else {
                span {}
            }
            button {
                class: "btn btn-primary",
                disabled: next_disabled.unwrap_or(false),
                onclick: move |_| match on_next {
                    Some(on_next) => on_next.call(()),
                    None => {
                        let _ = wizard.write().next();
                        flush_notices(wizard, notices);
                    }
                },
                {next_label.clone().unwrap_or_else(|| "Next".to_string())}
            }
        }
    )
}
