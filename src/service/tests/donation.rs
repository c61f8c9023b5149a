use mockito::Matcher;
use ngo_connect_test_utils::prelude::*;
use serde_json::json;

use crate::{
    model::{
        donation::{CreateDonationRequest, PledgeType},
        user::Role,
    },
    service::DonationService,
    session::SessionStore,
    util::test::{store_with_session, test_client, RecordingRedirect},
};

/// Tests recording a donation.
///
/// Verifies the donation is always sent as completed and is added to the local cache.
///
/// Expected: Ok, body carries `status: COMPLETED`, cache holds the donation
#[tokio::test]
async fn create_marks_completed_and_caches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/donations")
                .match_body(Matcher::PartialJson(json!({
                    "status": "COMPLETED",
                    "pledgeType": "MONTHLY",
                    "ngoId": TEST_NGO_ID,
                })))
                .with_status(201)
                .with_body(factory::donation(11, 750.0).to_string())
                .create()
        })
        .build()
        .await?;
    let store = store_with_session(Role::Donor);
    let client = test_client(&test, store.clone(), RecordingRedirect::at("/donate"));
    let request = CreateDonationRequest {
        amount: 750.0,
        payment_method: "card".to_string(),
        payment_id: "pay_mock_abc".to_string(),
        pledge_type: PledgeType::Monthly,
        message: String::new(),
        user_id: Some(TEST_USER_ID),
        ngo_id: TEST_NGO_ID,
        status: "PENDING".to_string(),
    };

    let donation = DonationService::new(&client).create(request).await.unwrap();

    assert_eq!(donation.id, 11);
    let cached = SessionStore::new(store).user_donations();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0]["id"], json!(11));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn history_for_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_endpoint(
            "GET",
            "/donations/user/42",
            TEST_TOKEN,
            200,
            json!([factory::donation(1, 100.0), factory::donation(2, 250.5)]),
            1,
        )
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Donor),
        RecordingRedirect::at("/donor-dashboard"),
    );

    let donations = DonationService::new(&client)
        .history(TEST_USER_ID)
        .await
        .unwrap();

    assert_eq!(donations.len(), 2);
    assert_eq!(donations[1].amount, 250.5);
    test.assert_mocks();

    Ok(())
}
