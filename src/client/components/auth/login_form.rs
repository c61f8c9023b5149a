use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{components::ErrorAlert, hooks::use_client, router::Route},
    guard::landing_for,
    model::user::Role,
    service::{AuthService, Credentials},
};

/// Email and password login for one account type.
///
/// A successful login lands on the role's own page.
#[component]
pub fn LoginForm(role: Role, title: &'static str, register: Route) -> Element {
    let client = use_client();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let client = client.clone();

        async move {
            submitting.set(true);
            error.set(None);

            let credentials = Credentials {
                email: email(),
                password: password(),
                role,
            };

            match AuthService::new(&client).login(&credentials).await {
                Ok(session) => {
                    let landing = landing_for(Some(session.role()));
                    navigator.replace(landing.path().to_string());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }

            submitting.set(false);
        }
    };

    let button_class = if role == Role::Admin {
        "btn btn-dark w-full"
    } else {
        "btn btn-primary w-full"
    };

    rsx!(
        div { class: "auth-backdrop",
            div { class: "card auth-card",
                h2 { class: "card-title", "{title}" }
                ErrorAlert { message: error() }
                form { class: "form", onsubmit,
                    label { class: "label", r#for: "email", "Email" }
                    input {
                        class: "input",
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    label { class: "label", r#for: "password", "Password" }
                    input {
                        class: "input",
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        class: button_class,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Logging in..." } else { "Login" }
                    }
                }
                div { class: "auth-links",
                    p {
                        "Don't have an account? "
                        Link { to: register, "Register here" }
                    }
                    Link { to: Route::SelectLogin {}, class: "btn btn-outline btn-sm",
                        "Back to Role Selection"
                    }
                }
            }
        }
    )
}
