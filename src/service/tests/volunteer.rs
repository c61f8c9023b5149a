use mockito::Matcher;
use ngo_connect_test_utils::prelude::*;
use serde_json::json;

use crate::{
    model::{opportunity::ApplicationRequest, user::Role},
    service::VolunteerService,
    util::test::{store_with_session, test_client, RecordingRedirect},
};

#[tokio::test]
async fn lists_opportunities() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/opportunities",
            200,
            json!([factory::opportunity(3, "Weekend tutor")]),
            1,
        )
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Volunteer),
        RecordingRedirect::at("/volunteer"),
    );

    let opportunities = VolunteerService::new(&client).opportunities().await.unwrap();

    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities[0].title, "Weekend tutor");
    assert_eq!(opportunities[0].requirements, vec!["Teaching"]);

    Ok(())
}

/// Tests applying for an opportunity.
///
/// Expected: application posted to the opportunity's apply endpoint
#[tokio::test]
async fn apply_posts_to_opportunity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/opportunities/3/apply")
                .match_body(Matcher::PartialJson(json!({
                    "opportunityId": 3,
                    "volunteerId": TEST_USER_ID,
                })))
                .with_status(201)
                .with_body(json!({ "id": 90, "opportunityId": 3, "status": "PENDING" }).to_string())
                .create()
        })
        .build()
        .await?;
    let client = test_client(
        &test,
        store_with_session(Role::Volunteer),
        RecordingRedirect::at("/volunteer"),
    );
    let application = ApplicationRequest {
        opportunity_id: 3,
        volunteer_id: Some(TEST_USER_ID),
        full_name: TEST_NAME.to_string(),
        email: TEST_EMAIL.to_string(),
        motivation: "I teach maths".to_string(),
        ..Default::default()
    };

    let created = VolunteerService::new(&client)
        .apply(&application)
        .await
        .unwrap();

    assert_eq!(created.id, 90);
    assert_eq!(created.status.as_deref(), Some("PENDING"));
    test.assert_mocks();

    Ok(())
}
