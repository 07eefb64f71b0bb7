use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    account::signup::{Signup as SignupState, SignupField},
    client::{
        components::Page,
        router::Route,
        store::{notice::use_notices, session::api_client},
    },
    config::Config,
    model::notice::IntoNotice,
    session::Identity,
};

#[component]
pub fn Signup() -> Element {
    let config = use_context::<Config>();
    let mut notices = use_notices();
    let navigator = use_navigator();
    let mut signup = use_signal(SignupState::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let registration = match signup.write().begin_submit() {
            Ok(registration) => registration,
            Err(e) => {
                notices.write().push(e.into_notice());
                return;
            }
        };
        let api = api_client(&config, &Identity::Anonymous);

        spawn(async move {
            let result = api.register_tourist(&registration).await;
            if let Err(e) = &result {
                tracing::warn!("Sign up failed: {}", e);
            }

            let (registered, notice) = signup.write().finish_submit(result);
            notices.write().push(notice);
            if registered {
                navigator.replace(Route::Login {});
            }
        });
    };

    let current = signup.read().clone();

    rsx!(
        Title { "Sign Up | The Pearl" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-lg",
                div { class: "card-body",
                    h2 { class: "card-title text-violet-600", "Create Your Account" }
                    form { class: "grid md:grid-cols-2 gap-4",
                        onsubmit: submit,
                        for field in SignupField::ALL {
                            label { key: "{field.label()}", class: "form-control",
                                span { class: "label-text", "{field.label()}" }
                                input {
                                    class: "input input-bordered",
                                    r#type: field.input_type(),
                                    required: true,
                                    value: "{current.form.field(field)}",
                                    oninput: move |evt| signup.write().form.set_field(field, evt.value()),
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary md:col-span-2",
                            r#type: "submit",
                            disabled: current.is_submitting(),
                            if current.is_submitting() { "Signing Up..." } else { "Sign Up" }
                        }
                    }
                    p { class: "text-sm text-center",
                        "Already have an account? "
                        Link { to: Route::Login {}, class: "link link-primary", "Login" }
                    }
                }
            }
        }
    )
}
