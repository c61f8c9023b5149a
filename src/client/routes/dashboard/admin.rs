use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page, RoleProtectedRoute},
        format::format_amount,
        hooks::use_client,
        routes::dashboard::StatCard,
    },
    model::{admin::PendingVerificationDto, user::Role},
    service::AdminService,
};

#[component]
pub fn AdminDashboard() -> Element {
    rsx!(
        document::Title { "Admin Dashboard | NGO Connect" }
        RoleProtectedRoute { roles: vec![Role::Admin],
            AdminOverview {}
        }
    )
}

#[component]
fn AdminOverview() -> Element {
    let client = use_client();
    let mut notice = use_signal(|| None::<String>);

    let mut dashboard = use_resource(move || {
        let client = client.clone();
        async move { AdminService::new(&client).dashboard().await }
    });

    let on_reviewed = move |message: String| {
        notice.set(Some(message));
        dashboard.restart();
    };

    rsx!(
        Page { class: "dashboard",
            h1 { class: "text-2xl", "Admin Dashboard" }
            if let Some(message) = notice() {
                div { class: "alert alert-info", "{message}" }
            }
            {match &*dashboard.read_unchecked() {
                Some(Ok(data)) => {
                    let overview = &data.overview;
                    rsx! {
                        div { class: "stats",
                            StatCard { title: "NGOs Registered", value: overview.total_ngos_registered.unwrap_or_default().to_string() }
                            StatCard { title: "NGOs Verified", value: overview.total_ngos_verified.unwrap_or_default().to_string() }
                            StatCard { title: "Users", value: overview.total_users_registered.unwrap_or_default().to_string() }
                            StatCard { title: "Donations", value: format_amount(overview.total_donations_amount.unwrap_or_default()) }
                            StatCard { title: "Open Opportunities", value: overview.active_volunteer_opportunities.unwrap_or_default().to_string() }
                        }
                        div { class: "grid grid-2",
                            div { class: "card",
                                div { class: "card-body",
                                    h2 { class: "card-title", "Pending Verifications" }
                                    if data.pending_verifications.is_empty() {
                                        p { class: "muted", "Nothing waiting for review." }
                                    }
                                    for ngo in data.pending_verifications.iter().cloned() {
                                        PendingRow { key: "{ngo.id}", ngo, on_reviewed }
                                    }
                                }
                            }
                            div { class: "card",
                                div { class: "card-body",
                                    h2 { class: "card-title", "Alerts" }
                                    if data.alerts.is_empty() {
                                        p { class: "muted", "No alerts." }
                                    }
                                    ul { class: "list",
                                        for alert in data.alerts.iter() {
                                            li { key: "{alert.id}",
                                                span { class: "badge", {alert.priority.clone().unwrap_or_default()} }
                                                " "
                                                {alert.title.clone().unwrap_or_default()}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
        }
    )
}

#[component]
fn PendingRow(ngo: PendingVerificationDto, on_reviewed: EventHandler<String>) -> Element {
    let client = use_client();
    let mut busy = use_signal(|| false);
    let id = ngo.id;
    let name = ngo
        .organization_name
        .unwrap_or_else(|| format!("NGO #{}", id));
    let label = name.clone();

    let review = move |approve: bool| {
        let client = client.clone();
        let name = name.clone();

        spawn(async move {
            busy.set(true);
            let service = AdminService::new(&client);
            let result = if approve {
                service.approve_ngo(id, "Verified from the admin dashboard").await
            } else {
                service.reject_ngo(id, "Rejected from the admin dashboard").await
            };
            busy.set(false);

            match result {
                Ok(()) => {
                    let verdict = if approve { "approved" } else { "rejected" };
                    on_reviewed.call(format!("{} was {}", name, verdict));
                }
                Err(e) => {
                    tracing::warn!("Review of NGO {} failed: {}", id, e);
                    on_reviewed.call(e.user_message());
                }
            }
        });
    };

    let approve = {
        let review = review.clone();
        move |_| review(true)
    };
    let reject = move |_| review(false);

    rsx!(
        div { class: "row",
            span { class: "row-title", "{label}" }
            div { class: "row-actions",
                button { class: "btn btn-primary btn-sm", disabled: busy(), onclick: approve, "Approve" }
                button { class: "btn btn-outline btn-sm", disabled: busy(), onclick: reject, "Reject" }
            }
        }
    )
}
