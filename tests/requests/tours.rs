use mockito::Matcher;
use pearl::{
    model::trip::{PaymentStatus, TripStatus},
    requests::tours::{total_earnings, ActiveTours},
};
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use crate::util::client;

async fn tours_setup() -> Result<TestSetup, TestError> {
    let mut test = TestSetup::new().await;

    let accepted = test.with_json_endpoint(
        "GET",
        &format!("/trips/tour-guide/{}/accepted", TEST_GUIDE_ID),
        200,
        &json!([factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Accepted")]),
        1,
    )?;
    let started = test.with_json_endpoint(
        "GET",
        &format!("/trips/tour-guide/{}/started", TEST_GUIDE_ID),
        200,
        &json!([factory::trip(6, 2, TEST_GUIDE_ID, "Started")]),
        1,
    )?;
    test.mocks.extend([accepted, started]);

    Ok(test)
}

#[tokio::test]
/// Expect a guide's accepted trip to be started through the status endpoint
async fn starts_accepted_trip() -> Result<(), TestError> {
    let mut test = tours_setup().await?;
    let update = test
        .server
        .mock("PATCH", "/trips/5/update-trip-status")
        .match_body(Matcher::Json(json!({ "tripStatus": "Started" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Started").to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tour_guide()));
    let mut tours = ActiveTours::default();
    let failed = tours.apply(ActiveTours::fetch(&api, TEST_GUIDE_ID).await);
    assert!(failed.is_empty());

    let ids: Vec<i64> = tours.trips.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![6, 5]);

    let notice = tours.advance(&api, 5).await;
    assert_eq!(
        notice.map(|n| n.message),
        Some("Trip status updated to \"Started\".".to_string())
    );
    assert!(tours.trips.iter().all(|t| t.trip_status == TripStatus::Started));

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an unpaid trip to be marked as paid
async fn marks_trip_paid() -> Result<(), TestError> {
    let mut test = tours_setup().await?;
    let payment = test
        .server
        .mock("PATCH", "/trips/6/update-payment-status")
        .match_body(Matcher::Json(json!({ "paymentStatus": "Paid" })))
        .with_status(200)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tour_guide()));
    let mut tours = ActiveTours::default();
    tours.apply(ActiveTours::fetch(&api, TEST_GUIDE_ID).await);

    let notice = tours.mark_paid(&api, 6).await;
    assert_eq!(
        notice.map(|n| n.message),
        Some("Payment status updated to \"Paid\".".to_string())
    );
    assert_eq!(tours.trips[0].payment_status, PaymentStatus::Paid);
    assert_eq!(tours.mark_paid(&api, 6).await, None);

    payment.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed status change to keep the trip where it was
async fn failed_status_change_keeps_trip() -> Result<(), TestError> {
    let mut test = tours_setup().await?;
    let update = test
        .server
        .mock("PATCH", "/trips/6/update-trip-status")
        .with_status(500)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tour_guide()));
    let mut tours = ActiveTours::default();
    tours.apply(ActiveTours::fetch(&api, TEST_GUIDE_ID).await);

    let notice = tours.advance(&api, 6).await;
    assert_eq!(
        notice.map(|n| n.message),
        Some("Failed to update trip status.".to_string())
    );
    assert_eq!(tours.trips.len(), 2);
    assert!(!tours.is_updating(6));

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect completed tours to sum the payments of paid trips
async fn completed_tours_earnings() -> Result<(), TestError> {
    let mut paid = factory::trip(7, TEST_TOURIST_ID, TEST_GUIDE_ID, "Completed");
    paid["paymentStatus"] = json!("Paid");
    let mut test = TestSetup::new().await;
    let completed = test.with_json_endpoint(
        "GET",
        &format!("/trips/tour-guide/{}/completed", TEST_GUIDE_ID),
        200,
        &json!([paid, factory::trip(8, 2, TEST_GUIDE_ID, "Completed")]),
        1,
    )?;

    let api = client(&test, Some(&token::tour_guide()));
    let trips = api.guide_completed_trips(TEST_GUIDE_ID).await.unwrap();

    assert_eq!(trips.len(), 2);
    assert_eq!(total_earnings(&trips), 500.0);

    completed.assert();

    Ok(())
}
