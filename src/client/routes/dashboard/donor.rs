use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page, RoleProtectedRoute},
        format::format_amount,
        hooks::{use_client, use_session},
        router::Route,
        routes::dashboard::{DonationTable, StatCard},
    },
    model::{donation::DonationDto, user::Role},
    service::DonationService,
};

#[component]
pub fn DonorDashboard() -> Element {
    rsx!(
        document::Title { "Donor Dashboard | NGO Connect" }
        RoleProtectedRoute { roles: vec![Role::Donor],
            DonorOverview {}
        }
    )
}

#[component]
fn DonorOverview() -> Element {
    let client = use_client();
    let session = use_session();
    let user_id = session.read().as_ref().and_then(|s| s.user.id);
    let name = session
        .read()
        .as_ref()
        .map(|s| s.user.display_name().to_string())
        .unwrap_or_default();

    let history = use_resource(move || {
        let client = client.clone();
        async move {
            match user_id {
                Some(id) => DonationService::new(&client).history(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    rsx!(
        Page { class: "dashboard",
            div { class: "dashboard-header",
                h1 { class: "text-2xl", "Welcome back, {name}" }
                Link { to: Route::DonationPage {}, class: "btn btn-primary", "Make a Donation" }
            }
            {match &*history.read_unchecked() {
                Some(Ok(Some(donations))) => rsx! {
                    DonorSummary { donations: donations.clone() }
                },
                Some(Ok(None)) => rsx! {
                    DonorSummary { donations: cached_donations() }
                },
                Some(Err(e)) => rsx! {
                    ErrorAlert { message: e.user_message() }
                    DonorSummary { donations: cached_donations() }
                },
                None => rsx! { Loading {} },
            }}
        }
    )
}

/// Donations recorded from this browser, shown when the backend history is unavailable.
fn cached_donations() -> Vec<DonationDto> {
    let client = consume_context::<crate::client::Client>();

    client
        .sessions()
        .user_donations()
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(donation) => Some(donation),
            Err(e) => {
                tracing::debug!("Skipping unreadable cached donation: {}", e);
                None
            }
        })
        .collect()
}

#[component]
fn DonorSummary(donations: Vec<DonationDto>) -> Element {
    let total: f64 = donations.iter().map(|d| d.amount).sum();
    let organizations = {
        let mut ids: Vec<i64> = donations
            .iter()
            .filter_map(|d| d.ngo_id.or(d.ngo.as_ref().map(|n| n.id)))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    };

    rsx!(
        div { class: "stats",
            StatCard { title: "Total Donated", value: format_amount(total) }
            StatCard { title: "Donations", value: donations.len().to_string() }
            StatCard { title: "NGOs Supported", value: organizations.to_string() }
        }
        div { class: "card",
            div { class: "card-body",
                h2 { class: "card-title", "Donation History" }
                DonationTable { donations }
            }
        }
    )
}
