use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page, RoleProtectedRoute},
        hooks::{use_client, use_session},
        routes::dashboard::{ApplicationTable, DonationTable},
    },
    model::user::Role,
    service::{AuthService, DonationService, VolunteerService},
};

#[component]
pub fn UserDashboard() -> Element {
    rsx!(
        document::Title { "My Dashboard | NGO Connect" }
        RoleProtectedRoute { roles: vec![Role::User, Role::Admin],
            UserOverview {}
        }
    )
}

#[component]
fn UserOverview() -> Element {
    let client = use_client();
    let session = use_session();
    let user_id = session.read().as_ref().and_then(|s| s.user.id);

    let profile = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { AuthService::new(&client).user_profile().await }
        }
    });

    let activity = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(id) = user_id else {
                return Ok((Vec::new(), Vec::new()));
            };
            let donations = DonationService::new(&client).history(id).await?;
            let applications = VolunteerService::new(&client).applications(id).await?;
            Ok::<_, crate::error::Error>((donations, applications))
        }
    });

    rsx!(
        Page { class: "dashboard",
            h1 { class: "text-2xl", "My Dashboard" }
            div { class: "card",
                div { class: "card-body",
                    h2 { class: "card-title", "Profile" }
                    {match &*profile.read_unchecked() {
                        Some(Ok(profile)) => rsx! {
                            dl { class: "details",
                                dt { "Name" }
                                dd { {profile.full_name.clone().unwrap_or_default()} }
                                dt { "Email" }
                                dd { "{profile.email}" }
                                dt { "Phone" }
                                dd { {profile.phone.clone().unwrap_or_default()} }
                                dt { "Address" }
                                dd { {profile.address.clone().unwrap_or_default()} }
                                dt { "Account type" }
                                dd { "{profile.user_type}" }
                            }
                        },
                        Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                        None => rsx! { Loading {} },
                    }}
                }
            }
            {match &*activity.read_unchecked() {
                Some(Ok((donations, applications))) => rsx! {
                    div { class: "grid grid-2",
                        div { class: "card",
                            div { class: "card-body",
                                h2 { class: "card-title", "Donation History" }
                                DonationTable { donations: donations.clone() }
                            }
                        }
                        div { class: "card",
                            div { class: "card-body",
                                h2 { class: "card-title", "Volunteer History" }
                                ApplicationTable { applications: applications.clone() }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
        }
    )
}
