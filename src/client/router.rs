use dioxus::prelude::*;

use crate::client::{
    components::ConditionalNavbar,
    routes::{
        auth::{
            AdminLogin, AdminRegister, DonorLogin, DonorRegister, NgoLogin, NgoRegister,
            SelectLogin, UserChoice, UserLogin, UserRegister, VolunteerLogin, VolunteerRegister,
        },
        dashboard::{
            AdminDashboard, DonorDashboard, NgoDashboard, UserDashboard, VolunteerDashboard,
        },
        DonationPage, Home, LedgerPage, NgoDirectory, NotFound, TransparencyPage,
        VolunteerPage,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ConditionalNavbar)]

    #[route("/")]
    Home {},

    #[nest("/auth")]

        #[route("/select-login")]
        SelectLogin {},

        #[route("/ngo-login")]
        NgoLogin {},

        #[route("/user-login")]
        UserLogin {},

        #[route("/admin-login")]
        AdminLogin {},

        #[route("/donor-login")]
        DonorLogin {},

        #[route("/volunteer-login")]
        VolunteerLogin {},

        #[route("/ngo-register")]
        NgoRegister {},

        #[route("/user-register")]
        UserRegister {},

        #[route("/admin-register")]
        AdminRegister {},

        #[route("/donor-register")]
        DonorRegister {},

        #[route("/volunteer-register")]
        VolunteerRegister {},

        #[route("/user-choice")]
        UserChoice {},

    #[end_nest]

    #[route("/directory/ngo-directory")]
    NgoDirectory {},

    #[route("/dashboards/admin-dashboard")]
    AdminDashboard {},

    #[route("/ngo-dashboard")]
    NgoDashboard {},

    #[route("/donor-dashboard")]
    DonorDashboard {},

    #[route("/volunteer-dashboard")]
    VolunteerDashboard {},

    #[route("/user-dashboard")]
    UserDashboard {},

    #[route("/donate")]
    DonationPage {},

    #[route("/volunteer")]
    VolunteerPage {},

    #[route("/transparency")]
    TransparencyPage {},

    #[route("/transparency/ledger")]
    LedgerPage {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
