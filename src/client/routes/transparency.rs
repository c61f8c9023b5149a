use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page},
        format::format_amount,
        hooks::use_client,
        router::Route,
    },
    model::ngo::NgoDto,
    service::NgoService,
};

const TOP_NGOS: usize = 5;

/// Public report of funds received per organization.
#[component]
pub fn TransparencyPage() -> Element {
    let client = use_client();

    let ngos = use_resource(move || {
        let client = client.clone();
        async move { NgoService::new(&client).list().await }
    });

    rsx!(
        document::Title { "Transparency | NGO Connect" }
        Page { class: "transparency",
            div { class: "dashboard-header",
                div {
                    h1 { class: "text-2xl", "Transparency Report" }
                    p { "Complete visibility into how your donations are making an impact." }
                }
                Link { to: Route::LedgerPage {}, class: "btn btn-outline", "View Fund Ledger" }
            }
            {match &*ngos.read_unchecked() {
                Some(Ok(ngos)) => rsx! { Report { ngos: ngos.clone() } },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
        }
    )
}

#[component]
fn Report(ngos: Vec<NgoDto>) -> Element {
    let total: f64 = ngos.iter().filter_map(|n| n.total_donations).sum();
    let registered = ngos.len();
    let verified = ngos.iter().filter(|n| n.is_verified == Some(true)).count();

    let mut ranked: Vec<&NgoDto> = ngos.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_donations
            .unwrap_or_default()
            .total_cmp(&a.total_donations.unwrap_or_default())
    });

    rsx!(
        div { class: "stats",
            div { class: "stat",
                div { class: "stat-title", "Total Donations" }
                div { class: "stat-value", {format_amount(total)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Registered NGOs" }
                div { class: "stat-value", "{registered}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Verified NGOs" }
                div { class: "stat-value", "{verified}" }
            }
        }
        div { class: "card",
            div { class: "card-body",
                h2 { class: "card-title", "Top Organizations" }
                table { class: "table",
                    thead {
                        tr {
                            th { "Organization" }
                            th { "Location" }
                            th { "Funds Received" }
                            th { "Share" }
                        }
                    }
                    tbody {
                        for ngo in ranked.into_iter().take(TOP_NGOS) {
                            {
                                let received = ngo.total_donations.unwrap_or_default();
                                let share = if total > 0.0 { received / total * 100.0 } else { 0.0 };
                                rsx! {
                                    tr { key: "{ngo.id}",
                                        td { "{ngo.organization_name}" }
                                        td { {ngo.location.clone().unwrap_or_default()} }
                                        td { {format_amount(received)} }
                                        td { {format!("{:.0}%", share)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
