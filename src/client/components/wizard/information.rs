use dioxus::prelude::*;

use super::StepNavigation;
use crate::wizard::{form::FormField, TripWizard};

#[component]
pub fn InformationStep(mut wizard: Signal<TripWizard>) -> Element {
    let form = wizard.read().form().clone();

    rsx!(
        div { class: "mb-4",
            h2 { class: "text-xl font-semibold", "Your Details" }
            p { class: "text-gray-500",
                "Planning a trip to "
                {form.destinations.iter().map(|d| d.name.as_str()).collect::<Vec<_>>().join(", ")}
            }
        }
        div { class: "grid md:grid-cols-2 gap-4",
            for field in FormField::REQUIRED {
                label { key: "{field:?}", class: "form-control",
                    span { class: "label-text", "{field}" }
                    input {
                        class: "input input-bordered",
                        r#type: field.input_type(),
                        value: form.field(field).to_string(),
                        oninput: move |evt| wizard.write().set_field(field, evt.value()),
                    }
                }
            }
        }
        StepNavigation { wizard }
    )
}
