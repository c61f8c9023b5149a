use dioxus::prelude::*;

use crate::{
    client::{components::Page, hooks::use_session, router::Route},
    guard::landing_for,
};

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let landing = session
        .read()
        .as_ref()
        .map(|s| landing_for(Some(s.role())).path());

    rsx!(
        document::Title { "NGO Connect" }
        document::Meta {
            name: "description",
            content: "Connecting NGOs with the donors and volunteers who support them."
        }
        Page { class: "home",
            section { class: "hero",
                h1 { class: "hero-title", "Connect. Contribute. Change." }
                p { class: "hero-subtitle",
                    "NGO Connect brings verified NGOs, donors and volunteers together in one place. Find a cause you care about, donate securely and track exactly where your support goes."
                }
                div { class: "hero-actions",
                    if let Some(landing) = landing {
                        Link { to: landing, class: "btn btn-light", "Go to Dashboard" }
                    } else {
                        Link { to: Route::SelectLogin {}, class: "btn btn-light", "Get Started" }
                        Link { to: Route::NgoRegister {}, class: "btn btn-outline", "Register your NGO" }
                    }
                }
            }
            section { class: "features",
                Feature {
                    title: "For Donors",
                    text: "Give one-time or recurring donations to verified organizations and keep every receipt in one place.",
                    link: Route::DonorRegister {},
                    action: "Become a Donor",
                }
                Feature {
                    title: "For Volunteers",
                    text: "Browse opportunities near you and apply to lend your time and skills.",
                    link: Route::VolunteerRegister {},
                    action: "Start Volunteering",
                }
                Feature {
                    title: "For NGOs",
                    text: "Reach supporters, publish volunteer requirements and report how funds are used.",
                    link: Route::NgoRegister {},
                    action: "Join as an NGO",
                }
            }
            section { class: "transparency-teaser",
                h2 { "Every rupee accounted for" }
                p { "Fund reports from registered NGOs are public." }
                Link { to: Route::TransparencyPage {}, class: "btn btn-primary", "View Transparency Reports" }
            }
        }
    )
}

#[component]
fn Feature(title: &'static str, text: &'static str, link: Route, action: &'static str) -> Element {
    rsx!(
        div { class: "card feature",
            div { class: "card-body",
                h3 { class: "card-title", "{title}" }
                p { "{text}" }
                Link { to: link, class: "btn btn-outline", "{action}" }
            }
        }
    )
}
