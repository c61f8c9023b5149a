use dioxus::prelude::*;

use crate::{
    client::{components::auth::RegisterForm, routes::auth::login_route},
    model::user::Role,
};

#[component]
pub fn NgoRegister() -> Element {
    register_page(Role::Ngo, "Register your NGO")
}

#[component]
pub fn UserRegister() -> Element {
    register_page(Role::User, "Create an Account")
}

#[component]
pub fn AdminRegister() -> Element {
    register_page(Role::Admin, "Admin Registration")
}

#[component]
pub fn DonorRegister() -> Element {
    register_page(Role::Donor, "Donor Registration")
}

#[component]
pub fn VolunteerRegister() -> Element {
    register_page(Role::Volunteer, "Volunteer Registration")
}

fn register_page(role: Role, title: &'static str) -> Element {
    rsx!(
        document::Title { "{title} | NGO Connect" }
        RegisterForm { role, title, login: login_route(role) }
    )
}
