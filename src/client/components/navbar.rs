use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHeart, FaUsers};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        hooks::{use_client, use_session},
        router::Route,
    },
    nav::{select_nav, NavVariant},
    service::AuthService,
};

/// Layout choosing the navigation bar for the current path and session.
#[component]
pub fn ConditionalNavbar() -> Element {
    let route = use_route::<Route>();
    let session = use_session();

    let variant = select_nav(&route.to_string(), session.read().as_ref());

    rsx! {
        {match variant {
            NavVariant::Public => rsx!(PublicNavbar {}),
            NavVariant::Authenticated => rsx!(UserNavbar {}),
            NavVariant::Hidden => rsx!(),
        }}

        Outlet::<Route> {}
    }
}

#[component]
pub fn PublicNavbar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "navbar-brand", "NGO Connect" }
            }
            div {
                class: "navbar-end",
                Link { to: Route::TransparencyPage {}, class: "btn btn-ghost", "Transparency" }
                Link { to: Route::SelectLogin {}, class: "btn btn-light", "Login" }
            }
        }
    }
}

#[component]
pub fn UserNavbar() -> Element {
    let client = use_client();
    let session = use_session();
    let navigator = use_navigator();

    let greeting = session
        .read()
        .as_ref()
        .map(|s| s.user.display_name().to_string())
        .unwrap_or_default();

    let logout = move |_| {
        if let Err(e) = AuthService::new(&client).logout() {
            tracing::error!("Failed to clear session on logout: {}", e);
        }
        navigator.push(Route::Home {});
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-start",
                span { class: "navbar-brand", "NGO Connect" }
                if !greeting.is_empty() {
                    span { class: "navbar-greeting", "Hello, {greeting}" }
                }
            }
            div {
                class: "navbar-end",
                Link { to: Route::DonationPage {}, class: "btn btn-outline",
                    Icon { width: 16, height: 16, fill: "currentColor", icon: FaHeart }
                    "Donate"
                }
                Link { to: Route::VolunteerPage {}, class: "btn btn-outline",
                    Icon { width: 16, height: 16, fill: "currentColor", icon: FaUsers }
                    "Volunteer"
                }
                button {
                    class: "btn btn-light",
                    onclick: logout,
                    "Logout"
                }
            }
        }
    }
}
