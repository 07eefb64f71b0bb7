use mockito::Matcher;
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use crate::util::client;

#[tokio::test]
/// Expect the first wishlist entry to create the wishlist
async fn creates_wishlist_on_first_add() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_no_wishlist(TEST_TOURIST_ID, 1)
        .build()
        .await?;
    let create = test
        .server
        .mock("POST", "/wishlist/add")
        .match_body(Matcher::Json(json!({ "touristId": 1, "destinations": [3] })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::wishlist(10, 1, &[3]).to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    assert_eq!(api.add_to_wishlist(TEST_TOURIST_ID, 3).await, Ok(true));

    create.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an existing wishlist to be replaced with the extended id list
async fn extends_existing_wishlist() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_wishlist(TEST_TOURIST_ID, &[1], 1)
        .build()
        .await?;
    let update = test
        .server
        .mock("PATCH", "/wishlist/10/update-destinations")
        .match_body(Matcher::Json(json!([1, 3])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::wishlist(10, 1, &[1, 3]).to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    assert_eq!(api.add_to_wishlist(TEST_TOURIST_ID, 3).await, Ok(true));

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect adding a destination already on the wishlist to send nothing
async fn skips_duplicate_wishlist_entry() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_wishlist(TEST_TOURIST_ID, &[1, 3], 1)
        .build()
        .await?;
    let update = test
        .server
        .mock("PATCH", "/wishlist/10/update-destinations")
        .expect(0)
        .create();

    let api = client(&test, Some(&token::tourist()));
    assert_eq!(api.add_to_wishlist(TEST_TOURIST_ID, 3).await, Ok(false));

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect clearing a selection that was never created to send nothing
async fn clearing_missing_selection_sends_nothing() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_no_selection(TEST_TOURIST_ID, 1)
        .build()
        .await?;
    let create = test
        .server
        .mock("POST", "/selected-destinations/add")
        .expect(0)
        .create();

    let api = client(&test, Some(&token::tourist()));
    assert_eq!(api.save_selected_destinations(TEST_TOURIST_ID, &[]).await, Ok(()));

    create.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an existing selection to be replaced in place
async fn replaces_existing_selection() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_selection(TEST_TOURIST_ID, &[1, 2], 1)
        .build()
        .await?;
    let update = test
        .server
        .mock("PATCH", "/selected-destinations/100/updated-selected-destinations")
        .match_body(Matcher::Json(json!([2])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::selected_destinations(100, 1, &[2]).to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    assert_eq!(api.save_selected_destinations(TEST_TOURIST_ID, &[2]).await, Ok(()));

    update.assert();
    test.assert_mocks();

    Ok(())
}
