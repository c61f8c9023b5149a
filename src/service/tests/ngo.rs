use mockito::Matcher;
use ngo_connect_test_utils::prelude::*;
use serde_json::json;

use crate::{
    model::{
        fund_report::FundReportDraft,
        ngo::NgoSearch,
        opportunity::{OpportunityDraft, OpportunityRequest},
        user::{Role, SessionUser},
    },
    service::NgoService,
    session::{MemoryStore, SessionStore},
    util::test::{session_for, store_with_session, test_client, RecordingRedirect},
};

/// NGO account whose login response carried no NGO id.
fn unlinked_ngo() -> (MemoryStore, SessionUser) {
    let mut session = session_for(Role::Ngo);
    session.user.ngo_id = None;

    let store = MemoryStore::new();
    SessionStore::new(store.clone()).establish(&session).unwrap();

    (store, session.user)
}

fn opportunity_request() -> OpportunityRequest {
    OpportunityDraft {
        title: "Weekend tutor".to_string(),
        description: "Teach maths to grade 8".to_string(),
        skills: "Teaching, Maths".to_string(),
        volunteers_needed: "4".to_string(),
        location: "Pune".to_string(),
        start_date: "2025-02-01".to_string(),
        ..OpportunityDraft::default()
    }
    .validate()
    .unwrap()
}

/// Tests the directory listing.
///
/// Expected: Ok with both NGOs decoded
#[tokio::test]
async fn lists_ngos() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_endpoint("GET", "/ngos", TEST_TOKEN, 200, factory::ngo_list(), 1)
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Donor),
        RecordingRedirect::at("/directory/ngo-directory"),
    );

    let ngos = NgoService::new(&client).list().await.unwrap();

    assert_eq!(ngos.len(), 2);
    assert_eq!(ngos[1].organization_name, "Green Earth Trust");
    assert_eq!(ngos[0].causes, vec!["Education", "Healthcare"]);
    test.assert_mocks();

    Ok(())
}

/// Tests a directory search with one blank filter.
///
/// Expected: only non-blank filters are sent
#[tokio::test]
async fn search_sends_non_blank_filters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/ngos/search")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("cause".into(), "Child Welfare".into()),
                    Matcher::UrlEncoded("location".into(), "Pune".into()),
                ]))
                .with_status(200)
                .with_body(json!([factory::ngo(3, "Bal Vikas")]).to_string())
                .create()
        })
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Volunteer),
        RecordingRedirect::at("/directory/ngo-directory"),
    );
    let filters = NgoSearch {
        query: Some(" ".to_string()),
        cause: Some("Child Welfare".to_string()),
        location: Some("Pune".to_string()),
    };

    let ngos = NgoService::new(&client).search(&filters).await.unwrap();

    assert_eq!(ngos.len(), 1);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn resolves_ngo_by_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/ngos/by-email")
                .match_query(Matcher::UrlEncoded("email".into(), TEST_EMAIL.into()))
                .with_status(200)
                .with_body(factory::ngo(TEST_NGO_ID, TEST_ORGANIZATION).to_string())
                .create()
        })
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Ngo),
        RecordingRedirect::at("/ngo-dashboard"),
    );

    let ngo = NgoService::new(&client).by_email(TEST_EMAIL).await.unwrap();

    assert_eq!(ngo.id, TEST_NGO_ID);
    assert_eq!(ngo.is_verified, Some(true));

    Ok(())
}

/// Tests publishing a volunteer opportunity.
///
/// Verifies the body carries the form values and that the stored entity echoed back, with its
/// nested NGO record, is accepted.
///
/// Expected: Ok, one authorized POST to the NGO's opportunities
#[tokio::test]
async fn creates_opportunity_for_ngo() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/ngos/7/opportunities")
                .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
                .match_body(Matcher::PartialJson(json!({
                    "title": "Weekend tutor",
                    "requirements": ["Teaching", "Maths"],
                    "volunteersNeeded": 4,
                    "durationType": "ONE_TIME",
                    "endDate": "2025-02-01T00:00:00Z",
                })))
                .with_status(200)
                .with_body(
                    json!({
                        "id": 11,
                        "title": "Weekend tutor",
                        "ngo": { "id": TEST_NGO_ID, "organizationName": TEST_ORGANIZATION },
                    })
                    .to_string(),
                )
                .create()
        })
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Ngo),
        RecordingRedirect::at("/ngo-dashboard"),
    );

    let result = NgoService::new(&client)
        .create_opportunity(TEST_NGO_ID, &opportunity_request())
        .await;

    assert!(result.is_ok(), "{:?}", result);
    test.assert_mocks();

    Ok(())
}

/// Tests editing an existing opportunity.
///
/// Expected: Ok, PUT to the opportunity under the NGO
#[tokio::test]
async fn updates_opportunity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("PUT", "/ngos/7/opportunities/11")
                .match_body(Matcher::PartialJson(json!({ "location": "Pune" })))
                .with_status(200)
                .with_body(json!({ "id": 11 }).to_string())
                .create()
        })
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Ngo),
        RecordingRedirect::at("/ngo-dashboard"),
    );

    let result = NgoService::new(&client)
        .update_opportunity(TEST_NGO_ID, 11, &opportunity_request())
        .await;

    assert!(result.is_ok(), "{:?}", result);
    test.assert_mocks();

    Ok(())
}

/// Tests removing an opportunity that belongs to another NGO.
///
/// Expected: Err carrying the backend's message
#[tokio::test]
async fn delete_of_foreign_opportunity_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "DELETE",
            "/ngos/7/opportunities/12",
            403,
            factory::error_body("Not your opportunity"),
            1,
        )
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Ngo),
        RecordingRedirect::at("/ngo-dashboard"),
    );

    let err = NgoService::new(&client)
        .delete_opportunity(TEST_NGO_ID, 12)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Not your opportunity");
    test.assert_mocks();

    Ok(())
}

/// Tests removing an own opportunity.
///
/// Expected: Ok on an empty 204 response
#[tokio::test]
async fn deletes_opportunity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/ngos/7/opportunities/11")
                .with_status(204)
                .create()
        })
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Ngo),
        RecordingRedirect::at("/ngo-dashboard"),
    );

    let result = NgoService::new(&client).delete_opportunity(TEST_NGO_ID, 11).await;

    assert!(result.is_ok(), "{:?}", result);
    test.assert_mocks();

    Ok(())
}

/// Tests reading an NGO's fund utilization reports.
///
/// Expected: Ok with every report decoded
#[tokio::test]
async fn lists_fund_reports() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/transparency/reports/ngo/7",
            200,
            json!([
                factory::fund_report(2, 15000.0, 8500.0),
                factory::fund_report(1, 4000.0, 4000.0),
            ]),
            1,
        )
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Donor),
        RecordingRedirect::at("/transparency/ledger"),
    );

    let reports = NgoService::new(&client).fund_reports(TEST_NGO_ID).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].balance(), 6500.0);
    assert_eq!(reports[1].ngo_id, Some(TEST_NGO_ID));
    test.assert_mocks();

    Ok(())
}

/// Tests submitting a fund utilization report.
///
/// Expected: Ok with the stored report, body carrying the date as `YYYY-MM-DD`
#[tokio::test]
async fn submits_fund_report() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/transparency/reports/ngo/7")
                .match_body(Matcher::PartialJson(json!({
                    "reportDate": "2025-03-31",
                    "totalFundsReceived": 15000.0,
                    "totalFundsSpent": 8500.0,
                })))
                .with_status(200)
                .with_body(factory::fund_report(3, 15000.0, 8500.0).to_string())
                .create()
        })
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Ngo),
        RecordingRedirect::at("/ngo-dashboard"),
    );
    let report = FundReportDraft {
        report_date: "2025-03-31".to_string(),
        total_funds_received: "15000".to_string(),
        total_funds_spent: "8500".to_string(),
        breakdown: "Education: 6000, Health camps: 2500".to_string(),
    }
    .validate()
    .unwrap();

    let stored = NgoService::new(&client)
        .create_fund_report(TEST_NGO_ID, &report)
        .await
        .unwrap();

    assert_eq!(stored.id, 3);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn own_id_uses_cached_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (store, user) = unlinked_ngo();
    SessionStore::new(store.clone())
        .cache_ngo_profile(&json!({"id": 9, "organizationName": TEST_ORGANIZATION}))
        .unwrap();
    let client = test_client(&test, store, RecordingRedirect::at("/ngo-dashboard"));

    let id = NgoService::new(&client).own_id(&user).await.unwrap();

    assert_eq!(id, Some(9));

    Ok(())
}

/// Tests resolving the NGO of an account with neither session id nor cached profile.
///
/// Expected: the NGO registered under the account's email
#[tokio::test]
async fn own_id_falls_back_to_email_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/ngos/by-email")
                .match_query(Matcher::UrlEncoded("email".into(), TEST_EMAIL.into()))
                .with_status(200)
                .with_body(factory::ngo(TEST_NGO_ID, TEST_ORGANIZATION).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (store, user) = unlinked_ngo();
    let client = test_client(&test, store, RecordingRedirect::at("/ngo-dashboard"));

    let id = NgoService::new(&client).own_id(&user).await.unwrap();

    assert_eq!(id, Some(TEST_NGO_ID));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn own_id_is_none_without_ngo_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/ngos/by-email")
                .match_query(Matcher::UrlEncoded("email".into(), TEST_EMAIL.into()))
                .with_status(404)
                .with_body(json!({"error": "NGO not found"}).to_string())
                .create()
        })
        .build()
        .await?;
    let (store, user) = unlinked_ngo();
    let client = test_client(&test, store, RecordingRedirect::at("/ngo-dashboard"));

    let id = NgoService::new(&client).own_id(&user).await.unwrap();

    assert_eq!(id, None);

    Ok(())
}
