//! Tests for recovery from `401 Unauthorized` responses.

use mockito::Matcher;
use ngo_connect_test_utils::prelude::*;
use serde_json::{json, Value};

use crate::{
    error::HttpError,
    model::user::Role,
    session::{
        KeyValueStore, MemoryStore, SessionStore, REFRESH_TOKEN_KEY, TOKEN_KEY, USER_KEY,
    },
    util::test::{store_with_session, test_client, RecordingRedirect},
};

const DONATIONS_PATH: &str = "/donations/user/42";

fn assert_session_cleared(store: &MemoryStore) {
    for key in [TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
        assert!(!store.contains_key(key), "{key} should be cleared");
    }
}

/// Tests a 401 followed by a successful refresh.
///
/// Verifies the refreshed token is stored and the original request is replayed with it.
///
/// Expected: Ok with the replayed response, one refresh call, no redirect
#[tokio::test]
async fn refreshes_once_and_replays() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_endpoint(
            "GET",
            DONATIONS_PATH,
            TEST_TOKEN,
            401,
            factory::error_body("Token expired"),
            1,
        )
        .with_refresh_endpoint("DONOR", 1)
        .with_authorized_endpoint(
            "GET",
            DONATIONS_PATH,
            TEST_REFRESHED_TOKEN,
            200,
            json!([factory::donation(1, 500.0)]),
            1,
        )
        .build()
        .await?;
    let store = store_with_session(Role::Donor);
    let redirect = RecordingRedirect::at("/donor-dashboard");
    let client = test_client(&test, store.clone(), redirect.clone());

    let donations: Vec<Value> = client.get(DONATIONS_PATH).await.unwrap();

    assert_eq!(donations.len(), 1);
    assert_eq!(
        store.get(TOKEN_KEY).unwrap().as_deref(),
        Some(TEST_REFRESHED_TOKEN)
    );
    assert!(redirect.visited().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests that the refresh call sends the stored refresh token.
///
/// Expected: refresh endpoint receives `{"refreshToken": <stored token>}` without a bearer token
#[tokio::test]
async fn refresh_sends_stored_refresh_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/auth/refresh-token")
                .match_header("authorization", Matcher::Missing)
                .match_body(Matcher::PartialJson(
                    json!({ "refreshToken": TEST_REFRESH_TOKEN }),
                ))
                .with_status(200)
                .with_body(factory::refresh_response("VOLUNTEER").to_string())
                .create()
        })
        .with_authorized_endpoint("GET", "/opportunities", TEST_TOKEN, 401, json!({}), 1)
        .with_authorized_endpoint("GET", "/opportunities", TEST_REFRESHED_TOKEN, 200, json!([]), 1)
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Volunteer),
        RecordingRedirect::at("/volunteer"),
    );

    let result: Result<Vec<Value>, _> = client.get("/opportunities").await;

    assert!(result.is_ok(), "{:?}", result);
    test.assert_mocks();

    Ok(())
}

/// Tests a 401 whose refresh is rejected.
///
/// Verifies the whole session is cleared and the user is sent to login selection.
///
/// Expected: Err(Server 401), all three session keys removed, one redirect
#[tokio::test]
async fn failed_refresh_clears_session_and_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_endpoint(
            "GET",
            DONATIONS_PATH,
            TEST_TOKEN,
            401,
            factory::error_body("Token expired"),
            1,
        )
        .with_failed_refresh_endpoint(401, 1)
        .build()
        .await?;
    let store = store_with_session(Role::Donor);
    let redirect = RecordingRedirect::at("/donor-dashboard");
    let client = test_client(&test, store.clone(), redirect.clone());

    let result: Result<Vec<Value>, HttpError> = client.get(DONATIONS_PATH).await;

    assert_eq!(result.unwrap_err().status(), Some(401));
    assert_session_cleared(&store);
    assert_eq!(redirect.visited(), vec!["/auth/select-login".to_string()]);
    test.assert_mocks();

    Ok(())
}

/// Tests a 401 when no refresh token is stored.
///
/// Expected: no refresh call, session cleared, redirect to login selection
#[tokio::test]
async fn missing_refresh_token_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_endpoint("GET", "/admin/dashboard", TEST_TOKEN, 401, json!({}), 1)
        .with_refresh_endpoint("ADMIN", 0)
        .build()
        .await?;
    let store = store_with_session(Role::Admin);
    store.remove(REFRESH_TOKEN_KEY).unwrap();
    let redirect = RecordingRedirect::at("/dashboards/admin-dashboard");
    let client = test_client(&test, store.clone(), redirect.clone());

    let result: Result<Value, HttpError> = client.get("/admin/dashboard").await;

    assert!(result.is_err());
    assert_session_cleared(&store);
    assert_eq!(redirect.visited(), vec!["/auth/select-login".to_string()]);
    test.assert_mocks();

    Ok(())
}

/// Tests forced logout while already on login selection.
///
/// Expected: session cleared, no redirect issued
#[tokio::test]
async fn no_redirect_when_already_on_select_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_endpoint("GET", "/auth/user-profile", TEST_TOKEN, 401, json!({}), 1)
        .with_failed_refresh_endpoint(403, 1)
        .build()
        .await?;
    let store = store_with_session(Role::User);
    let redirect = RecordingRedirect::at("/auth/select-login");
    let client = test_client(&test, store.clone(), redirect.clone());

    let result: Result<Value, HttpError> = client.get("/auth/user-profile").await;

    assert!(result.is_err());
    assert_session_cleared(&store);
    assert!(redirect.visited().is_empty());

    Ok(())
}

/// Tests a replayed request that is rejected again.
///
/// Verifies the retry flag stops a second refresh.
///
/// Expected: Err(Server 401), exactly one refresh call, refreshed session kept
#[tokio::test]
async fn second_unauthorized_is_not_retried() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_endpoint("GET", "/ngos/7", TEST_TOKEN, 401, json!({}), 1)
        .with_refresh_endpoint("DONOR", 1)
        .with_authorized_endpoint(
            "GET",
            "/ngos/7",
            TEST_REFRESHED_TOKEN,
            401,
            factory::error_body("Still unauthorized"),
            1,
        )
        .build()
        .await?;
    let store = store_with_session(Role::Donor);
    let redirect = RecordingRedirect::at("/donate");
    let client = test_client(&test, store.clone(), redirect.clone());

    let result: Result<Value, HttpError> = client.get("/ngos/7").await;

    match result {
        Err(HttpError::Server {
            status, message, ..
        }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Still unauthorized");
        }
        other => panic!("Expected a 401 server error, got: {:?}", other),
    }
    assert!(SessionStore::new(store).current().is_some());
    assert!(redirect.visited().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests a 401 from the public login endpoint.
///
/// Verifies public endpoints share the refresh path: one refresh attempt, and when it fails the
/// stale session is cleared.
///
/// Expected: Err with the backend message, one refresh call, session cleared, redirect
#[tokio::test]
async fn public_endpoint_401_attempts_refresh() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/auth/login",
            401,
            factory::error_body("Invalid email or password"),
            1,
        )
        .with_failed_refresh_endpoint(401, 1)
        .build()
        .await?;
    let store = store_with_session(Role::Donor);
    let redirect = RecordingRedirect::at("/auth/donor-login");
    let client = test_client(&test, store.clone(), redirect.clone());

    let body = json!({ "email": TEST_EMAIL, "password": "wrong", "userType": "DONOR" });
    let result: Result<Value, HttpError> = client.post("/auth/login", &body).await;

    match result {
        Err(HttpError::Server { message, .. }) => assert_eq!(message, "Invalid email or password"),
        other => panic!("Expected a server error, got: {:?}", other),
    }
    assert_session_cleared(&store);
    assert_eq!(redirect.visited(), vec!["/auth/select-login".to_string()]);
    test.assert_mocks();

    Ok(())
}
