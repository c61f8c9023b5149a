use dioxus::prelude::*;

use crate::{
    client::{components::auth::LoginForm, routes::auth::register_route},
    model::user::Role,
};

#[component]
pub fn NgoLogin() -> Element {
    login_page(Role::Ngo, "NGO Login")
}

#[component]
pub fn UserLogin() -> Element {
    login_page(Role::User, "User Login")
}

#[component]
pub fn AdminLogin() -> Element {
    login_page(Role::Admin, "Admin Login")
}

#[component]
pub fn DonorLogin() -> Element {
    login_page(Role::Donor, "Donor Login")
}

#[component]
pub fn VolunteerLogin() -> Element {
    login_page(Role::Volunteer, "Volunteer Login")
}

fn login_page(role: Role, title: &'static str) -> Element {
    rsx!(
        document::Title { "{title} | NGO Connect" }
        LoginForm { role, title, register: register_route(role) }
    )
}
