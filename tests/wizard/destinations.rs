use mockito::Matcher;
use pearl::{
    error::{wizard::WizardError, Error},
    model::{destination::DestinationSummary, notice::NoticeLevel},
    wizard::step::WizardStep,
};
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use super::{board_endpoints, tourist_wizard};
use crate::util::client;

#[tokio::test]
/// Expect the wishlist, selection, and active trip state to be loaded together
async fn loads_destination_board() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wishlist(TEST_TOURIST_ID, &[1, 2], 1)
        .with_selection(TEST_TOURIST_ID, &[2], 1)
        .with_active_trip(TEST_TOURIST_ID, false, 1)
        .with_accepted_trips(TEST_TOURIST_ID, vec![], 1)
        .with_destinations(vec![factory::destination(1, "Ella Rock")], 1)
        // Resolved for both the wishlist and the selection
        .with_destinations(vec![factory::destination(2, "Galle Fort")], 2)
        .build()
        .await?;

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = tourist_wizard();
    wizard.load(&api).await.unwrap();

    let board = wizard.board();
    assert!(!board.loading);
    assert_eq!(board.wishlist.len(), 2);
    assert_eq!(board.selected_ids(), vec![2]);
    assert!(!board.is_blocked());
    assert!(wizard.notices().is_empty());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an active trip to block advancing past the destination step
async fn active_trip_blocks_next() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_no_wishlist(TEST_TOURIST_ID, 1)
        .with_selection(TEST_TOURIST_ID, &[1], 1)
        .with_active_trip(TEST_TOURIST_ID, true, 1)
        .with_accepted_trips(
            TEST_TOURIST_ID,
            vec![factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Accepted")],
            1,
        )
        .with_destinations(vec![factory::destination(1, "Ella Rock")], 1)
        .build()
        .await?;

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = tourist_wizard();
    wizard.load(&api).await.unwrap();

    assert!(wizard.board().is_blocked());
    assert_eq!(wizard.next(), Err(WizardError::ActiveTripExists));
    assert_eq!(wizard.step(), WizardStep::SelectDestinations);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect advancing with an empty selection to keep the wizard on the destination step
async fn empty_selection_blocks_next() -> Result<(), TestError> {
    let test = board_endpoints(TestBuilder::new(), &[(1, "Ella Rock")], 1)
        .build()
        .await?;

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = tourist_wizard();
    wizard.load(&api).await.unwrap();

    assert_eq!(wizard.next(), Err(WizardError::EmptySelection));
    assert_eq!(wizard.step(), WizardStep::SelectDestinations);
    assert!(wizard.form().destinations.is_empty());

    let notices = wizard.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect adding the same destination twice to select it once and send one update
async fn duplicate_add_is_idempotent() -> Result<(), TestError> {
    let mut test = board_endpoints(TestBuilder::new(), &[(1, "Ella Rock")], 2)
        .build()
        .await?;
    let create = test
        .server
        .mock("POST", "/selected-destinations/add")
        .match_body(Matcher::Json(json!({ "touristId": 1, "selectedDestinations": [1] })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::selected_destinations(100, 1, &[1]).to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = tourist_wizard();
    wizard.load(&api).await.unwrap();

    wizard.add_to_selection(&api, 1).await.unwrap();
    wizard.add_to_selection(&api, 1).await.unwrap();

    assert_eq!(wizard.board().selected_ids(), vec![1]);

    let notices = wizard.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);

    assert_eq!(wizard.next(), Ok(WizardStep::FillInformation));
    assert_eq!(
        wizard.form().destinations,
        vec![DestinationSummary {
            id: 1,
            name: "Ella Rock".to_string()
        }]
    );

    create.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed selection update to leave the local selection untouched
async fn failed_selection_update_keeps_state() -> Result<(), TestError> {
    let mut test = board_endpoints(TestBuilder::new(), &[(1, "Ella Rock")], 2)
        .build()
        .await?;
    let create = test
        .server
        .mock("POST", "/selected-destinations/add")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Database unavailable"}"#)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = tourist_wizard();
    wizard.load(&api).await.unwrap();

    let result = wizard.add_to_selection(&api, 1).await;

    assert!(matches!(result, Err(Error::ApiError(_))));
    assert!(wizard.board().selected.is_empty());
    assert!(wizard.take_notices()[0].is_error());

    create.assert();

    Ok(())
}

#[tokio::test]
/// Expect removing a wishlist entry to keep the selection independent
async fn removes_wishlist_entry() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_wishlist(TEST_TOURIST_ID, &[1, 2], 2)
        .with_selection(TEST_TOURIST_ID, &[1], 1)
        .with_active_trip(TEST_TOURIST_ID, false, 1)
        .with_accepted_trips(TEST_TOURIST_ID, vec![], 1)
        .with_destinations(vec![factory::destination(1, "Ella Rock")], 2)
        .with_destinations(vec![factory::destination(2, "Galle Fort")], 1)
        .build()
        .await?;
    let update = test
        .server
        .mock("PATCH", "/wishlist/10/update-destinations")
        .match_body(Matcher::Json(json!([2])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::wishlist(10, 1, &[2]).to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = tourist_wizard();
    wizard.load(&api).await.unwrap();

    wizard.remove_from_wishlist(&api, 1).await.unwrap();

    let board = wizard.board();
    assert_eq!(board.wishlist.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);
    assert_eq!(board.selected_ids(), vec![1]);

    update.assert();
    test.assert_mocks();

    Ok(())
}
