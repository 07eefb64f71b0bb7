mod tours;

use mockito::Matcher;
use pearl::{model::trip::TripStatus, requests::TripRequests};
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use crate::util::client;

async fn guide_setup(pending: Vec<serde_json::Value>, active: bool) -> Result<TestSetup, TestError> {
    let mut test = TestSetup::new().await;

    let pending = test.with_json_endpoint(
        "GET",
        &format!("/trips/tour-guide/{}/pending", TEST_GUIDE_ID),
        200,
        &json!(pending),
        1,
    )?;
    let active = test.with_json_endpoint(
        "GET",
        &format!("/trips/tour-guide/{}/has-active-trip", TEST_GUIDE_ID),
        200,
        &json!({ "has_active_trip": active }),
        1,
    )?;
    test.mocks.extend([pending, active]);

    Ok(test)
}

#[tokio::test]
/// Expect accepting a request to remove it and block further acceptances
async fn accept_removes_request() -> Result<(), TestError> {
    let mut test = guide_setup(
        vec![
            factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Pending"),
            factory::trip(6, 2, TEST_GUIDE_ID, "Pending"),
        ],
        false,
    )
    .await?;
    let update = test
        .server
        .mock("PATCH", "/trips/5/update-trip-status")
        .match_body(Matcher::Json(json!({ "tripStatus": "Accepted" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Accepted").to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tour_guide()));
    let mut requests = TripRequests::default();
    let notices = requests.apply(TripRequests::fetch(&api, TEST_GUIDE_ID).await);

    assert!(notices.is_empty());
    assert_eq!(requests.pending.len(), 2);
    assert!(requests.can_accept());

    let notice = requests.decide(&api, 5, TripStatus::Accepted).await.unwrap();

    assert_eq!(notice.message, "Request has been accepted.");
    assert_eq!(requests.pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![6]);
    assert!(requests.has_active_trip);
    assert!(!requests.can_accept());

    // The second request can no longer be accepted
    assert!(requests.decide(&api, 6, TripStatus::Accepted).await.is_none());

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a guide with an active trip to still be able to reject requests
async fn reject_while_active() -> Result<(), TestError> {
    let mut test = guide_setup(
        vec![factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Pending")],
        true,
    )
    .await?;
    let update = test
        .server
        .mock("PATCH", "/trips/5/update-trip-status")
        .match_body(Matcher::Json(json!({ "tripStatus": "Rejected" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Rejected").to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tour_guide()));
    let mut requests = TripRequests::default();
    requests.apply(TripRequests::fetch(&api, TEST_GUIDE_ID).await);

    assert!(!requests.can_accept());
    assert!(requests.decide(&api, 5, TripStatus::Accepted).await.is_none());

    let notice = requests.decide(&api, 5, TripStatus::Rejected).await.unwrap();

    assert_eq!(notice.message, "Request has been rejected.");
    assert!(requests.pending.is_empty());

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed decision to keep the request listed
async fn failed_decision_keeps_request() -> Result<(), TestError> {
    let mut test = guide_setup(
        vec![factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Pending")],
        false,
    )
    .await?;
    let update = test
        .server
        .mock("PATCH", "/trips/5/update-trip-status")
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tour_guide()));
    let mut requests = TripRequests::default();
    requests.apply(TripRequests::fetch(&api, TEST_GUIDE_ID).await);

    let notice = requests.decide(&api, 5, TripStatus::Accepted).await.unwrap();

    assert!(notice.is_error());
    assert_eq!(requests.pending.len(), 1);
    assert!(requests.deciding.is_none());
    assert!(!requests.has_active_trip);

    update.assert();
    test.assert_mocks();

    Ok(())
}
