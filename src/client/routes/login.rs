use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Page,
        router::Route,
        store::{
            notice::use_notices,
            session::{api_client, sign_in, use_identity},
        },
    },
    config::Config,
    model::{
        notice::{IntoNotice, Notice},
        user::LoginForm,
    },
    session::Identity,
};

#[component]
pub fn Login() -> Element {
    let config = use_context::<Config>();
    let identity = use_identity();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let login = move |evt: FormEvent| {
        evt.prevent_default();

        if loading() {
            return;
        }

        let credentials = LoginForm {
            username: username(),
            password: password(),
        };
        let api = api_client(&config, &Identity::Anonymous);
        loading.set(true);

        spawn(async move {
            let result = api.login(&credentials).await;
            loading.set(false);

            let token = match result {
                Ok(token) => token,
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    notices.write().push(e.into_notice());
                    return;
                }
            };

            let Some(role) = sign_in(identity, &token.access_token).role() else {
                notices
                    .write()
                    .push(Notice::error("The issued access token could not be read."));
                return;
            };

            notices.write().push(Notice::success("Login successful!"));
            match role.home_path().parse::<Route>() {
                Ok(route) => {
                    navigator.replace(route);
                }
                Err(e) => tracing::error!("Invalid home route for {}: {}", role, e),
            }
        });
    };

    rsx!(
        Title { "Login | The Pearl" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-sm",
                div { class: "card-body",
                    h2 { class: "card-title text-violet-600", "Login Here" }
                    form { class: "flex flex-col gap-4",
                        onsubmit: login,
                        input {
                            class: "input input-bordered",
                            r#type: "email",
                            placeholder: "Enter Your Email Here",
                            required: true,
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            placeholder: "Enter Your Password Here",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Logging In..." } else { "Login" }
                        }
                    }
                }
            }
        }
    )
}
