use dioxus::prelude::*;

use crate::client::{components::Page, hooks::use_session, router::Route};

/// Where plain user accounts land after login: pick between giving and volunteering.
#[component]
pub fn UserChoice() -> Element {
    let session = use_session();
    let greeting = session
        .read()
        .as_ref()
        .map(|s| format!(", {}", s.user.display_name()))
        .unwrap_or_default();

    rsx!(
        document::Title { "Welcome | NGO Connect" }
        Page { class: "choice",
            div { class: "choice-header",
                h1 { class: "text-2xl", "Welcome{greeting}!" }
                p {
                    "Thank you for joining our mission to make a difference. Choose how you'd like to contribute to positive change in your community."
                }
            }
            div { class: "grid grid-2",
                div { class: "card",
                    div { class: "card-body",
                        h3 { class: "card-title", "Make a Donation" }
                        p { "Support verified NGOs with a one-time or recurring donation." }
                        Link { to: Route::DonationPage {}, class: "btn btn-primary", "Donate Now" }
                    }
                }
                div { class: "card",
                    div { class: "card-body",
                        h3 { class: "card-title", "Volunteer Your Time" }
                        p { "Find opportunities that match your skills and availability." }
                        Link { to: Route::VolunteerPage {}, class: "btn btn-primary", "Find Opportunities" }
                    }
                }
            }
            div { class: "choice-footer",
                Link { to: Route::UserDashboard {}, class: "btn btn-outline", "Go to my Dashboard" }
                Link { to: Route::NgoDirectory {}, class: "btn btn-ghost", "Browse the NGO Directory" }
            }
        }
    )
}
