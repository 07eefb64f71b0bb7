use dioxus::prelude::*;

use super::{flush_notices, StepNavigation};
use crate::{
    client::store::{notice::use_notices, session::use_api},
    config::Config,
    wizard::TripWizard,
};

#[component]
pub fn ConfirmStep(mut wizard: Signal<TripWizard>) -> Element {
    let api = use_api();
    let notices = use_notices();
    let config = use_context::<Config>();

    let confirm = use_callback(move |_: ()| {
        let api = api.clone();
        let clear_after_submit = config.clear_selection_after_submit;

        let request = wizard.write().begin_submit();
        flush_notices(wizard, notices);
        let Ok(request) = request else {
            return;
        };

        spawn(async move {
            let result = api.create_trip(&request).await;
            let submitted = wizard.write().finish_submit(result).is_ok();
            flush_notices(wizard, notices);

            if submitted && clear_after_submit {
                let tourist_id = wizard.write().begin_clear_selection();
                if let Ok(tourist_id) = tourist_id {
                    let result = api.save_selected_destinations(tourist_id, &[]).await;
                    let _ = wizard.write().apply_clear_selection(result);
                }
                flush_notices(wizard, notices);
            }
        });
    });

    let form = wizard.read().form().clone();
    let submitting = wizard.read().is_submitting();
    let destinations = form
        .destinations
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    rsx!(
        h2 { class: "text-xl font-semibold mb-4", "Confirm Your Trip" }
        div { class: "card shadow-sm",
            div { class: "card-body grid md:grid-cols-2 gap-2",
                p { span { class: "font-medium", "Destinations: " } "{destinations}" }
                p { span { class: "font-medium", "Email: " } "{form.email}" }
                p { span { class: "font-medium", "Contact: " } "{form.contact}" }
                p { span { class: "font-medium", "Country: " } "{form.country}" }
                p { span { class: "font-medium", "Passport: " } "{form.passport_number}" }
                p { span { class: "font-medium", "Address: " } "{form.address}" }
                p { span { class: "font-medium", "Travellers: " } "{form.num_adults} adults, {form.num_children} children" }
                p { span { class: "font-medium", "Start date: " } "{form.start_date}" }
                p { span { class: "font-medium", "Days: " } "{form.num_days}" }
                p { span { class: "font-medium", "Budget: " } "{form.trip_payment}" }
                if let Some(guide) = &form.selected_guide {
                    div { class: "md:col-span-2 border-t pt-2",
                        p { class: "font-medium", "Tour guide" }
                        p { "{guide.name}" }
                        p { class: "text-sm text-gray-500", "{guide.address}" }
                    }
                } else {
                    p { class: "md:col-span-2 text-red-700", "No tour guide selected." }
                }
            }
        }
        StepNavigation {
            wizard,
            next_label: if submitting { "Sending..." } else { "Confirm Trip" },
            next_disabled: submitting,
            on_next: move |_| confirm.call(()),
        }
    )
}
