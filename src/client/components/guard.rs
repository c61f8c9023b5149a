use dioxus::prelude::*;

use crate::{
    client::{hooks::use_session, redirect::RouterRedirect, Sessions},
    guard::{GuardPolicy, GuardState, RouteGuard},
    model::user::Role,
};

/// Renders its children only while a session token is present.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    rsx! {
        Guarded { policy: GuardPolicy::Authenticated, {children} }
    }
}

/// Renders its children only for the listed roles, sending everyone else to their own landing
/// page. Without a role list any valid session is enough.
#[component]
pub fn RoleProtectedRoute(roles: Option<Vec<Role>>, children: Element) -> Element {
    rsx! {
        Guarded { policy: GuardPolicy::Roles(roles), {children} }
    }
}

#[component]
fn Guarded(policy: GuardPolicy, children: Element) -> Element {
    let sessions = use_context::<Sessions>();
    let session = use_session();
    let mut guard = use_signal(|| RouteGuard::new(policy.clone()));
    let mut state = use_signal(|| GuardState::Checking);

    // Re-evaluated on mount, when the policy changes and on every session change
    use_effect(use_reactive!(|policy| {
        let _ = session.read();
        let mut guard = guard.write();

        if let GuardPolicy::Roles(roles) = policy {
            guard.set_roles(roles);
        }
        guard.reset();

        state.set(guard.evaluate(&sessions, &RouterRedirect));
    }));

    if state().is_authorized() {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}
