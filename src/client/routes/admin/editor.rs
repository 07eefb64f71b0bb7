use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::listing::editor::{
    DestinationForm, EditTarget, Editor, EntityForm, TourGuideForm, ACTIVITIES, CLIMATES,
    DESTINATION_TYPES, DISTRICTS, PROVINCES,
};

#[component]
fn TextInput(
    label: &'static str,
    value: String,
    kind: Option<&'static str>,
    on_input: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control",
            span { class: "label-text", "{label}" }
            input {
                class: "input input-bordered",
                r#type: kind.unwrap_or("text"),
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}

#[component]
fn SelectInput(
    label: &'static str,
    options: Vec<&'static str>,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control",
            span { class: "label-text", "{label}" }
            select {
                class: "select select-bordered",
                value: "{value}",
                onchange: move |evt| on_input.call(evt.value()),
                option { value: "", disabled: true, "Select {label}" }
                for option in options {
                    option { key: "{option}", value: "{option}", selected: value == option, "{option}" }
                }
            }
        }
    )
}

/// Modal frame shared by the admin editors
fn editor_modal<F: EntityForm + 'static>(
    mut editor: Signal<Editor<F>>,
    on_submit: EventHandler<()>,
    fields: Element,
) -> Element {
    let (target, saving) = {
        let current = editor.read();
        (current.target(), current.is_saving())
    };
    let Some(target) = target else {
        return VNode::empty();
    };
    let heading = match target {
        EditTarget::New => format!("Add {}", F::NOUN),
        EditTarget::Existing(_) => format!("Edit {}", F::NOUN),
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                div { class: "flex justify-between items-center mb-4",
                    h3 { class: "text-lg font-semibold", "{heading}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        disabled: saving,
                        onclick: move |_| editor.write().close(),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
                form {
                    class: "grid md:grid-cols-2 gap-4",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    {fields}
                    div { class: "modal-action md:col-span-2",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving,
                            if saving { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn DestinationEditor(
    mut editor: Signal<Editor<DestinationForm>>,
    on_submit: EventHandler<()>,
) -> Element {
    let form = editor.read().form().clone();

    let fields = rsx!(
        TextInput {
            label: "Name",
            value: form.name,
            on_input: move |v| editor.write().form_mut().name = v,
        }
        TextInput {
            label: "Image URL",
            value: form.image,
            kind: "url",
            on_input: move |v| editor.write().form_mut().image = v,
        }
        SelectInput {
            label: "Type",
            options: DESTINATION_TYPES.to_vec(),
            value: form.kind,
            on_input: move |v| editor.write().form_mut().kind = v,
        }
        SelectInput {
            label: "Climate",
            options: CLIMATES.to_vec(),
            value: form.climate,
            on_input: move |v| editor.write().form_mut().climate = v,
        }
        SelectInput {
            label: "Province",
            options: PROVINCES.to_vec(),
            value: form.province,
            on_input: move |v| editor.write().form_mut().province = v,
        }
        SelectInput {
            label: "District",
            options: DISTRICTS.to_vec(),
            value: form.district,
            on_input: move |v| editor.write().form_mut().district = v,
        }
        fieldset { class: "md:col-span-2",
            legend { class: "label-text mb-2", "Activities" }
            div { class: "flex flex-wrap gap-4",
                for activity in ACTIVITIES {
                    label { key: "{activity}", class: "flex items-center gap-2",
                        input {
                            class: "checkbox checkbox-sm",
                            r#type: "checkbox",
                            checked: form.activities.iter().any(|a| a == activity),
                            onchange: move |_| editor.write().form_mut().toggle_activity(activity),
                        }
                        "{activity}"
                    }
                }
            }
        }
        label { class: "form-control md:col-span-2",
            span { class: "label-text", "Details (one paragraph per line)" }
            textarea {
                class: "textarea textarea-bordered h-32",
                value: "{form.details}",
                oninput: move |evt| editor.write().form_mut().details = evt.value(),
            }
        }
    );

    editor_modal(editor, on_submit, fields)
}

#[component]
pub fn TourGuideEditor(
    mut editor: Signal<Editor<TourGuideForm>>,
    on_submit: EventHandler<()>,
) -> Element {
    let form = editor.read().form().clone();
    let is_new = editor.read().target() == Some(EditTarget::New);

    let fields = rsx!(
        TextInput {
            label: "Name",
            value: form.name,
            on_input: move |v| editor.write().form_mut().name = v,
        }
        TextInput {
            label: "Email",
            value: form.email,
            kind: "email",
            on_input: move |v| editor.write().form_mut().email = v,
        }
        if is_new {
            TextInput {
                label: "Password",
                value: form.password,
                kind: "password",
                on_input: move |v| editor.write().form_mut().password = v,
            }
            TextInput {
                label: "Review Count",
                value: form.review_count,
                kind: "number",
                on_input: move |v| editor.write().form_mut().review_count = v,
            }
        }
        TextInput {
            label: "NIC",
            value: form.nic,
            on_input: move |v| editor.write().form_mut().nic = v,
        }
        TextInput {
            label: "Telephone",
            value: form.telephone,
            kind: "tel",
            on_input: move |v| editor.write().form_mut().telephone = v,
        }
        TextInput {
            label: "License Number",
            value: form.license_number,
            on_input: move |v| editor.write().form_mut().license_number = v,
        }
        TextInput {
            label: "Address",
            value: form.address,
            on_input: move |v| editor.write().form_mut().address = v,
        }
    );

    editor_modal(editor, on_submit, fields)
}
