use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, TextField},
        hooks::use_client,
        router::Route,
    },
    error::{auth::FieldErrors, AuthError, Error},
    model::{ngo::ALL_CAUSES, user::Role},
    service::{AuthService, RegistrationForm},
};

#[component]
pub fn RegisterForm(role: Role, title: &'static str, login: Route) -> Element {
    let client = use_client();

    let mut form = use_signal(|| RegistrationForm {
        role,
        ..Default::default()
    });
    let mut field_errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| None::<String>);
    let mut registered = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let client = client.clone();

        async move {
            if let Err(errors) = form.read().validate() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(FieldErrors::default());
            error.set(None);
            submitting.set(true);

            let submitted = form();
            match AuthService::new(&client).register(&submitted).await {
                Ok(_) => registered.set(true),
                Err(Error::AuthError(AuthError::InvalidForm(errors))) => field_errors.set(errors),
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }

            submitting.set(false);
        }
    };

    if registered() {
        let email = form.read().email.clone();
        return rsx!(RegistrationComplete { email, login });
    }

    let field_error = move |field: &str| field_errors.read().get(field).map(str::to_string);
    let name_label = if role == Role::Ngo {
        "Organization Name"
    } else {
        "Full Name"
    };

    rsx!(
        div { class: "auth-backdrop",
            div { class: "card auth-card auth-card-wide",
                h2 { class: "card-title", "{title}" }
                ErrorAlert { message: error() }
                form { class: "form", onsubmit,
                    TextField {
                        label: name_label,
                        value: form.read().name.clone(),
                        error: field_error("name"),
                        oninput: move |v| form.write().name = v,
                    }
                    TextField {
                        label: "Email",
                        input_type: "email",
                        value: form.read().email.clone(),
                        error: field_error("email"),
                        oninput: move |v| form.write().email = v,
                    }
                    TextField {
                        label: "Phone",
                        input_type: "tel",
                        value: form.read().phone.clone(),
                        error: field_error("phone"),
                        oninput: move |v| form.write().phone = v,
                    }
                    TextField {
                        label: "Address",
                        value: form.read().address.clone(),
                        oninput: move |v| form.write().address = v,
                    }
                    if role == Role::Ngo {
                        TextField {
                            label: "Registration ID",
                            value: form.read().registration_id.clone(),
                            error: field_error("registrationId"),
                            oninput: move |v| form.write().registration_id = v,
                        }
                        TextField {
                            label: "Registration Number",
                            value: form.read().registration_number.clone(),
                            error: field_error("registrationNumber"),
                            oninput: move |v| form.write().registration_number = v,
                        }
                        TextField {
                            label: "Location",
                            value: form.read().location.clone(),
                            oninput: move |v| form.write().location = v,
                        }
                        TextField {
                            label: "Point of Contact",
                            value: form.read().point_of_contact_name.clone(),
                            oninput: move |v| form.write().point_of_contact_name = v,
                        }
                        TextField {
                            label: "Point of Contact Phone",
                            input_type: "tel",
                            value: form.read().point_of_contact_phone.clone(),
                            oninput: move |v| form.write().point_of_contact_phone = v,
                        }
                        label { class: "label", "Description" }
                        textarea {
                            class: "input",
                            rows: 3,
                            value: form.read().description.clone(),
                            oninput: move |e| form.write().description = e.value(),
                        }
                        fieldset { class: "causes",
                            legend { class: "label", "Causes" }
                            for cause in ALL_CAUSES {
                                label { class: "checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked: form.read().causes.iter().any(|c| c == cause),
                                        onchange: move |e| {
                                            let mut form = form.write();
                                            form.causes.retain(|c| c != cause);
                                            if e.checked() {
                                                form.causes.push(cause.to_string());
                                            }
                                        },
                                    }
                                    "{cause}"
                                }
                            }
                            if let Some(message) = field_error("causes") {
                                p { class: "field-error", "{message}" }
                            }
                        }
                    }
                    TextField {
                        label: "Password",
                        input_type: "password",
                        value: form.read().password.clone(),
                        error: field_error("password"),
                        oninput: move |v| form.write().password = v,
                    }
                    TextField {
                        label: "Confirm Password",
                        input_type: "password",
                        value: form.read().confirm_password.clone(),
                        error: field_error("confirmPassword"),
                        oninput: move |v| form.write().confirm_password = v,
                    }
                    button {
                        class: "btn btn-primary w-full",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Registering..." } else { "Register" }
                    }
                }
                div { class: "auth-links",
                    p {
                        "Already have an account? "
                        Link { to: login, "Login here" }
                    }
                }
            }
        }
    )
}

/// Shown once the account exists, with the option to resend the verification email.
#[component]
fn RegistrationComplete(email: String, login: Route) -> Element {
    let client = use_client();
    let mut notice = use_signal(|| None::<String>);

    let resend = {
        let email = email.clone();
        move |_| {
            let client = client.clone();
            let email = email.clone();
            async move {
                match AuthService::new(&client).verify_email(&email).await {
                    Ok(()) => notice.set(Some(format!("Verification email sent to {}", email))),
                    Err(e) => notice.set(Some(e.user_message())),
                }
            }
        }
    };

    rsx!(
        div { class: "auth-backdrop",
            div { class: "card auth-card",
                h2 { class: "card-title", "Registration successful" }
                p { "Your account for {email} has been created. You can log in now." }
                if let Some(notice) = notice() {
                    div { class: "alert alert-info", "{notice}" }
                }
                div { class: "auth-links",
                    Link { to: login, class: "btn btn-primary", "Continue to Login" }
                    button { class: "btn btn-outline", onclick: resend, "Resend verification email" }
                }
            }
        }
    )
}
