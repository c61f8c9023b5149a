use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page, RoleProtectedRoute},
        hooks::{use_client, use_session},
        router::Route,
        routes::dashboard::{ApplicationTable, StatCard},
    },
    model::user::Role,
    service::VolunteerService,
};

#[component]
pub fn VolunteerDashboard() -> Element {
    rsx!(
        document::Title { "Volunteer Dashboard | NGO Connect" }
        RoleProtectedRoute { roles: vec![Role::Volunteer],
            VolunteerOverview {}
        }
    )
}

#[component]
fn VolunteerOverview() -> Element {
    let client = use_client();
    let session = use_session();
    let user_id = session.read().as_ref().and_then(|s| s.user.id);

    let applications = use_resource(move || {
        let client = client.clone();
        async move {
            match user_id {
                Some(id) => VolunteerService::new(&client).applications(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    rsx!(
        Page { class: "dashboard",
            div { class: "dashboard-header",
                h1 { class: "text-2xl", "Volunteer Dashboard" }
                Link { to: Route::VolunteerPage {}, class: "btn btn-primary", "Find Opportunities" }
            }
            {match &*applications.read_unchecked() {
                Some(Ok(applications)) => {
                    let accepted = applications
                        .iter()
                        .filter(|a| a.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("ACCEPTED")))
                        .count();
                    rsx! {
                        div { class: "stats",
                            StatCard { title: "Applications", value: applications.len().to_string() }
                            StatCard { title: "Accepted", value: accepted.to_string() }
                        }
                        div { class: "card",
                            div { class: "card-body",
                                h2 { class: "card-title", "My Applications" }
                                ApplicationTable { applications: applications.clone() }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
        }
    )
}
