use pearl_test_utils::{fixtures::factory, prelude::*};

use crate::util::client;

#[tokio::test]
/// Expect both the object and the bare boolean active trip bodies to be understood
async fn reads_active_trip_flag_shapes() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_active_trip(TEST_TOURIST_ID, true, 1)
        .build()
        .await?;
    let bare = test.with_json_endpoint(
        "GET",
        "/trips/tourist/2/has-active-trip",
        200,
        &serde_json::Value::Bool(true),
        1,
    )?;

    let api = client(&test, Some(&token::tourist()));
    assert_eq!(api.tourist_has_active_trip(TEST_TOURIST_ID).await, Ok(true));
    assert_eq!(api.tourist_has_active_trip(2).await, Ok(true));

    bare.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a missing active trip resource to mean no active trip
async fn missing_active_trip_is_false() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("GET", "/trips/tourist/1/has-active-trip")
        .with_status(404)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    assert_eq!(api.tourist_has_active_trip(TEST_TOURIST_ID).await, Ok(false));

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect accepted trips to decode with their derived card fields
async fn lists_accepted_trips() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_accepted_trips(
            TEST_TOURIST_ID,
            vec![factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Accepted")],
            1,
        )
        .build()
        .await?;

    let api = client(&test, Some(&token::tourist()));
    let trips = api.tourist_accepted_trips(TEST_TOURIST_ID).await.unwrap();

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].headline(), "Trip to Ella Rock & more");
    assert_eq!(trips[0].end_date().map(|d| d.to_string()), Some("2025-06-06".to_string()));

    test.assert_mocks();

    Ok(())
}
