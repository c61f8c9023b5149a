use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page, ProtectedRoute},
        hooks::use_client,
        router::Route,
    },
    model::ngo::{NgoDto, NgoSearch},
    service::NgoService,
};

#[component]
pub fn NgoDirectory() -> Element {
    rsx!(
        document::Title { "NGO Directory | NGO Connect" }
        ProtectedRoute {
            Directory {}
        }
    )
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
fn Directory() -> Element {
    let client = use_client();
    let mut query = use_signal(String::new);
    let mut cause = use_signal(String::new);
    let mut location = use_signal(String::new);

    let options = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let service = NgoService::new(&client);
                // Filters are optional, so a failed lookup only leaves the lists empty
                let causes = service.causes().await.unwrap_or_default();
                let locations = service.locations().await.unwrap_or_default();
                (causes, locations)
            }
        }
    });

    let ngos = use_resource(move || {
        let client = client.clone();
        let filters = NgoSearch {
            query: non_blank(query()),
            cause: non_blank(cause()),
            location: non_blank(location()),
        };

        async move {
            let service = NgoService::new(&client);
            if filters.to_query().is_empty() {
                service.list().await
            } else {
                service.search(&filters).await
            }
        }
    });

    let (causes, locations) = options.cloned().unwrap_or_default();

    rsx!(
        Page { class: "directory",
            h1 { class: "text-2xl", "NGO Directory" }
            div { class: "filters",
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "Search by name or keyword",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                select {
                    class: "input",
                    value: "{cause}",
                    onchange: move |e| cause.set(e.value()),
                    option { value: "", "All causes" }
                    for c in causes {
                        option { value: "{c}", "{c}" }
                    }
                }
                select {
                    class: "input",
                    value: "{location}",
                    onchange: move |e| location.set(e.value()),
                    option { value: "", "All locations" }
                    for l in locations {
                        option { value: "{l}", "{l}" }
                    }
                }
            }
            {match &*ngos.read_unchecked() {
                Some(Ok(ngos)) if ngos.is_empty() => rsx! {
                    p { class: "muted", "No NGOs match your search." }
                },
                Some(Ok(ngos)) => rsx! {
                    div { class: "grid grid-3",
                        for ngo in ngos.iter().cloned() {
                            NgoCard { key: "{ngo.id}", ngo }
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
fn NgoCard(ngo: NgoDto) -> Element {
    let causes = ngo.causes.join(", ");

    rsx!(
        div { class: "card",
            div { class: "card-body",
                div { class: "card-heading",
                    h3 { class: "card-title", "{ngo.organization_name}" }
                    if ngo.is_verified == Some(true) {
                        span { class: "badge badge-success", "Verified" }
                    }
                }
                if let Some(location) = &ngo.location {
                    p { class: "muted", "{location}" }
                }
                if let Some(description) = &ngo.description {
                    p { "{description}" }
                }
                if !causes.is_empty() {
                    p { class: "causes-line", "{causes}" }
                }
                div { class: "card-actions",
                    Link { to: Route::DonationPage {}, class: "btn btn-primary btn-sm", "Donate" }
                    if let Some(website) = &ngo.website {
                        a { href: "{website}", target: "_blank", class: "btn btn-ghost btn-sm", "Website" }
                    }
                }
            }
        }
    )
}
