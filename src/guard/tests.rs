//! Tests for route guard decisions and the guard state machine.

mod decide {
    use crate::{
        guard::{decide, GuardPolicy, GuardState, Landing},
        model::user::Role,
        util::test::session_for,
    };

    /// Tests the unconditional guard with a token present.
    ///
    /// Expected: Authorized
    #[test]
    fn authenticated_with_token_is_authorized() {
        let state = decide(&GuardPolicy::Authenticated, true, None);

        assert_eq!(state, GuardState::Authorized);
    }

    /// Tests the unconditional guard without a token.
    ///
    /// Expected: Redirecting to login selection
    #[test]
    fn authenticated_without_token_redirects_to_login() {
        let state = decide(&GuardPolicy::Authenticated, false, None);

        assert_eq!(state, GuardState::Redirecting(Landing::SelectLogin));
    }

    /// Tests the role guard without a parsed session (missing or malformed user record).
    ///
    /// Expected: Redirecting to login selection, even with a token present
    #[test]
    fn roles_without_session_redirects_to_login() {
        let policy = GuardPolicy::Roles(Some(vec![Role::Admin]));

        assert_eq!(
            decide(&policy, true, None),
            GuardState::Redirecting(Landing::SelectLogin)
        );
        assert_eq!(
            decide(&policy, false, None),
            GuardState::Redirecting(Landing::SelectLogin)
        );
    }

    /// Tests every role against every single-role requirement.
    ///
    /// Verifies members are authorized and non-members are sent to their own landing page.
    ///
    /// Expected: Authorized iff role is required, else the role's landing
    #[test]
    fn every_role_against_every_requirement() {
        for user_role in Role::ALL {
            let session = session_for(user_role);
            for required in Role::ALL {
                let policy = GuardPolicy::Roles(Some(vec![required]));
                let state = decide(&policy, true, Some(&session));

                if user_role == required {
                    assert_eq!(state, GuardState::Authorized, "{user_role} in [{required}]");
                } else {
                    let expected = match user_role {
                        Role::Admin => "/dashboards/admin-dashboard",
                        Role::Ngo => "/ngo-dashboard",
                        Role::Donor => "/donor-dashboard",
                        Role::Volunteer => "/volunteer-dashboard",
                        Role::User => "/auth/user-choice",
                    };
                    match state {
                        GuardState::Redirecting(landing) => assert_eq!(landing.path(), expected),
                        other => panic!("{user_role} not in [{required}] gave {other:?}"),
                    }
                }
            }
        }
    }

    /// Tests a multi-role requirement such as the NGO dashboard's.
    ///
    /// Expected: NGO and ADMIN authorized, DONOR redirected to the donor dashboard
    #[test]
    fn multi_role_requirement() {
        let policy = GuardPolicy::Roles(Some(vec![Role::Ngo, Role::Admin]));

        assert!(decide(&policy, true, Some(&session_for(Role::Ngo))).is_authorized());
        assert!(decide(&policy, true, Some(&session_for(Role::Admin))).is_authorized());
        assert_eq!(
            decide(&policy, true, Some(&session_for(Role::Donor))),
            GuardState::Redirecting(Landing::DonorDashboard)
        );
    }

    /// Tests required roles given as names in any case.
    ///
    /// Expected: Authorized for a case-insensitive match
    #[test]
    fn role_names_match_case_insensitively() {
        let roles: Vec<Role> = ["admin", "Ngo"]
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        let policy = GuardPolicy::Roles(Some(roles));

        assert!(decide(&policy, true, Some(&session_for(Role::Ngo))).is_authorized());
    }

    /// Tests the role guard with no role restriction.
    ///
    /// Expected: Authorized for any valid session
    #[test]
    fn no_role_list_authorizes_any_session() {
        let policy = GuardPolicy::Roles(None);

        for role in Role::ALL {
            assert!(decide(&policy, true, Some(&session_for(role))).is_authorized());
        }
    }
}

mod route_guard {
    use crate::{
        guard::{GuardState, Landing, RouteGuard},
        model::user::Role,
        session::{KeyValueStore, MemoryStore, SessionStore, TOKEN_KEY, USER_KEY},
        util::test::{session_for, RecordingRedirect},
    };

    /// Tests the unconditional guard with a valid session.
    ///
    /// Expected: Authorized and no navigation issued
    #[test]
    fn authorized_issues_no_navigation() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.establish(&session_for(Role::Donor)).unwrap();
        let redirect = RecordingRedirect::at("/directory/ngo-directory");
        let mut guard = RouteGuard::authenticated();

        let state = guard.evaluate(&sessions, &redirect);

        assert_eq!(state, GuardState::Authorized);
        assert!(redirect.visited().is_empty());
    }

    /// Tests the unconditional guard with no token.
    ///
    /// Expected: exactly one redirect to `/auth/select-login`, even when evaluated again
    #[test]
    fn missing_token_redirects_exactly_once() {
        let sessions = SessionStore::new(MemoryStore::new());
        let redirect = RecordingRedirect::at("/directory/ngo-directory");
        let mut guard = RouteGuard::authenticated();

        guard.evaluate(&sessions, &redirect);
        let state = guard.evaluate(&sessions, &redirect);

        assert_eq!(state, GuardState::Redirecting(Landing::SelectLogin));
        assert_eq!(redirect.visited(), vec!["/auth/select-login".to_string()]);
    }

    /// Tests the role guard with a token but a malformed user record.
    ///
    /// Expected: treated as no session, redirect to login selection
    #[test]
    fn malformed_user_redirects_to_login() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "token").unwrap();
        store.set(USER_KEY, "[1, 2").unwrap();
        let sessions = SessionStore::new(store);
        let redirect = RecordingRedirect::at("/donor-dashboard");
        let mut guard = RouteGuard::with_roles([Role::Donor]);

        let state = guard.evaluate(&sessions, &redirect);

        assert_eq!(state, GuardState::Redirecting(Landing::SelectLogin));
        assert_eq!(redirect.visited(), vec!["/auth/select-login".to_string()]);
    }

    /// Tests that changing the role list re-runs the decision.
    ///
    /// Expected: second evaluation after a role change issues a new decision
    #[test]
    fn role_change_reevaluates() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.establish(&session_for(Role::Volunteer)).unwrap();
        let redirect = RecordingRedirect::at("/user-dashboard");
        let mut guard = RouteGuard::with_roles([Role::User, Role::Admin]);

        assert_eq!(
            guard.evaluate(&sessions, &redirect),
            GuardState::Redirecting(Landing::VolunteerDashboard)
        );

        assert!(guard.set_roles(Some(vec![Role::Volunteer])));
        assert_eq!(guard.state(), GuardState::Checking);
        assert_eq!(guard.evaluate(&sessions, &redirect), GuardState::Authorized);
        assert_eq!(redirect.visited().len(), 1);
    }

    /// Tests that setting the same role list keeps the settled state.
    ///
    /// Expected: no state change
    #[test]
    fn same_roles_keep_state() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.establish(&session_for(Role::Admin)).unwrap();
        let redirect = RecordingRedirect::at("/ngo-dashboard");
        let mut guard = RouteGuard::with_roles([Role::Ngo, Role::Admin]);
        guard.evaluate(&sessions, &redirect);

        assert!(!guard.set_roles(Some(vec![Role::Ngo, Role::Admin])));
        assert_eq!(guard.state(), GuardState::Authorized);
    }

    /// Tests re-evaluation after the session was cleared elsewhere.
    ///
    /// Expected: Authorized first, then redirect to login after reset
    #[test]
    fn reset_after_logout_redirects() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.establish(&session_for(Role::Ngo)).unwrap();
        let redirect = RecordingRedirect::at("/ngo-dashboard");
        let mut guard = RouteGuard::with_roles([Role::Ngo]);
        assert!(guard.evaluate(&sessions, &redirect).is_authorized());

        sessions.clear().unwrap();
        guard.reset();

        assert_eq!(
            guard.evaluate(&sessions, &redirect),
            GuardState::Redirecting(Landing::SelectLogin)
        );
    }
}
