use mockito::Matcher;
use pearl::{
    catalog::add_to_dream_list,
    model::{destination::DestinationDto, notice::NoticeLevel},
};
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use crate::util::client;

fn ella_rock() -> Result<DestinationDto, TestError> {
    Ok(serde_json::from_value(factory::destination(3, "Ella Rock"))?)
}

#[tokio::test]
/// Expect a new destination to be appended to the dream list with a success notice
async fn adds_destination_to_dream_list() -> Result<(), TestError> {
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
    let notice = add_to_dream_list(&api, TEST_TOURIST_ID, &ella_rock()?).await;

    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Ella Rock added to your Dream List!");

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a destination already on the dream list to only be reported
async fn reports_destination_already_listed() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_wishlist(TEST_TOURIST_ID, &[3], 1)
        .build()
        .await?;
    let update = test
        .server
        .mock("PATCH", "/wishlist/10/update-destinations")
        .expect(0)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let notice = add_to_dream_list(&api, TEST_TOURIST_ID, &ella_rock()?).await;

    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "Ella Rock is already in your Dream List");

    update.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the dream list to be created for a tourist without one
async fn creates_missing_dream_list() -> Result<(), TestError> {
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
    let notice = add_to_dream_list(&api, TEST_TOURIST_ID, &ella_rock()?).await;

    assert_eq!(notice.level, NoticeLevel::Success);

    create.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failing wishlist service to produce an error notice naming the destination
async fn reports_dream_list_failure() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let wishlist = test
        .server
        .mock("GET", "/wishlist/1")
        .with_status(500)
        .with_body("database offline")
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let notice = add_to_dream_list(&api, TEST_TOURIST_ID, &ella_rock()?).await;

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to add Ella Rock to Dream List");

    wishlist.assert();

    Ok(())
}
