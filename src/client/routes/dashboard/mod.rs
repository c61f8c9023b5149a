pub mod admin;
pub mod donor;
pub mod ngo;
pub mod user;
pub mod volunteer;

pub use admin::AdminDashboard;
pub use donor::DonorDashboard;
pub use ngo::NgoDashboard;
pub use user::UserDashboard;
pub use volunteer::VolunteerDashboard;

use dioxus::prelude::*;

use crate::{
    client::format::{format_amount, format_relative_time},
    model::{donation::DonationDto, opportunity::ApplicationDto},
};

#[component]
fn StatCard(title: &'static str, value: String) -> Element {
    rsx!(
        div { class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
        }
    )
}

#[component]
fn DonationTable(donations: Vec<DonationDto>) -> Element {
    if donations.is_empty() {
        return rsx!(p { class: "muted", "No donations yet." });
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Organization" }
                        th { "Amount" }
                        th { "Pledge" }
                        th { "Status" }
                    }
                }
                tbody {
                    {donations.iter().map(|donation| {
                        let organization = donation
                            .ngo
                            .as_ref()
                            .map(|ngo| ngo.organization_name.clone())
                            .or_else(|| donation.donor_name.clone())
                            .unwrap_or_else(|| "-".to_string());

                        rsx!(
                            tr { key: "{donation.id}",
                                td {
                                    {donation.donation_date.as_ref().map(format_relative_time).unwrap_or_default()}
                                }
                                td { "{organization}" }
                                td { {format_amount(donation.amount)} }
                                td { {donation.pledge_type.clone().unwrap_or_default()} }
                                td {
                                    span { class: "badge", {donation.status.clone().unwrap_or_default()} }
                                }
                            }
                        )
                    })}
                }
            }
        }
    )
}

#[component]
fn ApplicationTable(applications: Vec<ApplicationDto>) -> Element {
    if applications.is_empty() {
        return rsx!(p { class: "muted", "No applications yet." });
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Opportunity" }
                        th { "Status" }
                    }
                }
                tbody {
                    {applications.iter().map(|application| rsx!(
                        tr { key: "{application.id}",
                            td {
                                {application
                                    .opportunity_title
                                    .clone()
                                    .unwrap_or_else(|| format!("Opportunity #{}", application.opportunity_id.unwrap_or_default()))}
                            }
                            td {
                                span { class: "badge", {application.status.clone().unwrap_or_else(|| "PENDING".to_string())} }
                            }
                        }
                    ))}
                }
            }
        }
    )
}
