use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn SelectLogin() -> Element {
    rsx!(
        document::Title { "Login | NGO Connect" }
        div { class: "auth-backdrop",
            div { class: "card auth-card",
                h2 { class: "card-title", "Select Your Login" }
                div { class: "stack",
                    Link { to: Route::NgoLogin {}, class: "btn btn-outline", "NGO Login" }
                    Link { to: Route::UserLogin {}, class: "btn btn-outline", "User Login" }
                    Link { to: Route::DonorLogin {}, class: "btn btn-outline", "Donor Login" }
                    Link { to: Route::VolunteerLogin {}, class: "btn btn-outline", "Volunteer Login" }
                    Link { to: Route::AdminLogin {}, class: "btn btn-dark", "Admin Login" }
                }
                div { class: "auth-links",
                    Link { to: Route::Home {}, class: "btn btn-ghost btn-sm", "Back to Home" }
                }
            }
        }
    )
}
