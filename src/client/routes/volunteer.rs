use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page},
        hooks::{use_client, use_session},
        router::Route,
    },
    model::opportunity::{ApplicationRequest, OpportunityDto},
    service::VolunteerService,
};

#[component]
pub fn VolunteerPage() -> Element {
    let client = use_client();
    let mut applying = use_signal(|| None::<OpportunityDto>);
    let mut notice = use_signal(|| None::<String>);

    let opportunities = use_resource(move || {
        let client = client.clone();
        async move { VolunteerService::new(&client).opportunities().await }
    });

    rsx!(
        document::Title { "Volunteer | NGO Connect" }
        Page { class: "volunteer",
            h1 { class: "text-2xl", "Volunteer Opportunities" }
            if let Some(message) = notice() {
                div { class: "alert alert-success", "{message}" }
            }
            if let Some(opportunity) = applying() {
                ApplicationForm {
                    opportunity,
                    on_close: move |message: Option<String>| {
                        notice.set(message);
                        applying.set(None);
                    },
                }
            }
            {match &*opportunities.read_unchecked() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "No open opportunities right now, check back soon." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "grid grid-3",
                        for opportunity in list.iter().cloned() {
                            OpportunityCard {
                                key: "{opportunity.id}",
                                opportunity,
                                on_apply: move |o| applying.set(Some(o)),
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
        }
    )
}

#[component]
fn OpportunityCard(opportunity: OpportunityDto, on_apply: EventHandler<OpportunityDto>) -> Element {
    let spots = match (opportunity.volunteers_needed, opportunity.volunteers_applied) {
        (Some(needed), Some(applied)) => Some(format!("{} of {} spots filled", applied, needed)),
        (Some(needed), None) => Some(format!("{} volunteers needed", needed)),
        _ => None,
    };
    let requirements = opportunity.requirements.join(", ");

    rsx!(
        div { class: "card",
            div { class: "card-body",
                div { class: "card-heading",
                    h3 { class: "card-title", "{opportunity.title}" }
                    if let Some(urgency) = &opportunity.urgency {
                        span { class: "badge", "{urgency}" }
                    }
                }
                if let Some(ngo) = &opportunity.ngo {
                    p { class: "muted", "{ngo}" }
                }
                if let Some(description) = &opportunity.description {
                    p { "{description}" }
                }
                ul { class: "facts",
                    if let Some(location) = &opportunity.location {
                        li { "Location: {location}" }
                    }
                    if let Some(commitment) = &opportunity.time_commitment {
                        li { "Commitment: {commitment}" }
                    }
                    if !requirements.is_empty() {
                        li { "Requirements: {requirements}" }
                    }
                    if let Some(spots) = spots {
                        li { "{spots}" }
                    }
                }
                div { class: "card-actions",
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| on_apply.call(opportunity.clone()),
                        "Apply"
                    }
                }
            }
        }
    )
}

#[component]
fn ApplicationForm(opportunity: OpportunityDto, on_close: EventHandler<Option<String>>) -> Element {
    let client = use_client();
    let session = use_session();

    let user = session.read().as_ref().map(|s| s.user.clone());

    let mut application = use_signal(|| ApplicationRequest {
        opportunity_id: opportunity.id,
        volunteer_id: user.as_ref().and_then(|u| u.id),
        full_name: user.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
        email: user.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
        ..Default::default()
    });
    let mut skills = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let title = opportunity.title.clone();

    if user.is_none() {
        return rsx!(
            div { class: "card",
                div { class: "card-body",
                    p { "Please log in to apply for opportunities." }
                    div { class: "form-actions",
                        Link { to: Route::SelectLogin {}, class: "btn btn-primary", "Login" }
                        button { class: "btn btn-ghost", onclick: move |_| on_close.call(None), "Cancel" }
                    }
                }
            }
        );
    }

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let client = client.clone();
        let title = opportunity.title.clone();

        async move {
            let mut request = application();
            request.skills = skills
                .read()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();

            if request.motivation.trim().is_empty() {
                error.set(Some("Please tell the organization why you want to help".to_string()));
                return;
            }

            submitting.set(true);
            let result = VolunteerService::new(&client).apply(&request).await;
            submitting.set(false);

            match result {
                Ok(_) => on_close.call(Some(format!("Your application for {} was submitted", title))),
                Err(e) => {
                    tracing::warn!("Application for opportunity {} failed: {}", request.opportunity_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        }
    };

    rsx!(
        div { class: "card application-card",
            div { class: "card-body",
                h2 { class: "card-title", "Apply: {title}" }
                ErrorAlert { message: error() }
                form { class: "form", onsubmit,
                    label { class: "label", "Full Name" }
                    input {
                        class: "input",
                        required: true,
                        value: application.read().full_name.clone(),
                        oninput: move |e| application.write().full_name = e.value(),
                    }
                    label { class: "label", "Email" }
                    input {
                        class: "input",
                        r#type: "email",
                        required: true,
                        value: application.read().email.clone(),
                        oninput: move |e| application.write().email = e.value(),
                    }
                    label { class: "label", "Phone" }
                    input {
                        class: "input",
                        r#type: "tel",
                        value: application.read().phone.clone(),
                        oninput: move |e| application.write().phone = e.value(),
                    }
                    label { class: "label", "Availability" }
                    input {
                        class: "input",
                        placeholder: "e.g. weekends",
                        value: application.read().availability.clone(),
                        oninput: move |e| application.write().availability = e.value(),
                    }
                    label { class: "label", "Skills (comma separated)" }
                    input {
                        class: "input",
                        value: "{skills}",
                        oninput: move |e| skills.set(e.value()),
                    }
                    label { class: "label", "Why do you want to volunteer?" }
                    textarea {
                        class: "input",
                        rows: 3,
                        value: application.read().motivation.clone(),
                        oninput: move |e| application.write().motivation = e.value(),
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| on_close.call(None),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Submitting..." } else { "Submit Application" }
                        }
                    }
                }
            }
        }
    )
}
