use mockito::Matcher;
use pearl::{
    error::{wizard::WizardError, Error},
    wizard::step::WizardStep,
};
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use super::{board_endpoints, fill_details, wizard_at_information, with_selection_created};
use crate::util::client;

fn confirm_builder() -> TestBuilder {
    with_selection_created(board_endpoints(TestBuilder::new(), &[(1, "Ella Rock")], 2))
        .with_tour_guides(vec![factory::tour_guide(7, "Nimal")], 1)
}

#[tokio::test]
/// Expect the happy path to submit exactly one pending trip request
async fn submits_trip_request() -> Result<(), TestError> {
    let token = token::tourist();

    let mut test = confirm_builder().build().await?;
    let submit = test
        .server
        .mock("POST", "/trips/add")
        .match_header("authorization", format!("Bearer {}", token).as_str())
        .match_body(Matcher::PartialJson(json!({
            "touristId": 1,
            "tourGuideId": 7,
            "destinations": ["Ella Rock"],
            "numberOfAdults": 2,
            "numberOfChildren": 0,
            "startDate": "2025-06-01",
            "numberOfDays": 5,
            "tripStatus": "Pending",
            "paymentStatus": "Pending",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::trip(55, 1, 7, "Pending").to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token));
    let mut wizard = wizard_at_information(&api).await;
    fill_details(&mut wizard);
    assert_eq!(wizard.next(), Ok(WizardStep::SelectGuide));

    wizard.load_guides(&api).await.unwrap();
    wizard.select_guide(7).unwrap();
    assert_eq!(wizard.next(), Ok(WizardStep::ConfirmTrip));

    let trip = wizard.confirm(&api).await.unwrap();

    assert_eq!(trip.id, 55);
    assert_eq!(wizard.step(), WizardStep::Success);
    assert!(!wizard.is_submitting());
    assert!(wizard.take_notices().iter().any(|n| !n.is_error()));

    submit.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed submission to keep the confirmation step and resend the same payload
async fn failed_submission_can_be_retried() -> Result<(), TestError> {
    let mut test = confirm_builder().build().await?;

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = wizard_at_information(&api).await;
    fill_details(&mut wizard);
    wizard.next().unwrap();
    wizard.load_guides(&api).await.unwrap();
    wizard.select_guide(7).unwrap();
    wizard.next().unwrap();

    let payload = serde_json::to_value(wizard.form().build_request(TEST_TOURIST_ID).unwrap())?;
    let submit = test
        .server
        .mock("POST", "/trips/add")
        .match_body(Matcher::Json(payload))
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Internal Server Error"}"#)
        .expect(2)
        .create();
    wizard.take_notices();

    let before = wizard.form().clone();

    for _ in 0..2 {
        let result = wizard.confirm(&api).await;

        assert!(matches!(result, Err(Error::ApiError(_))));
        assert_eq!(wizard.step(), WizardStep::ConfirmTrip);
        assert_eq!(wizard.form(), &before);
        assert!(!wizard.is_submitting());

        let notices = wizard.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
    }

    submit.assert();

    Ok(())
}

#[tokio::test]
/// Expect confirming without a guide to send nothing
async fn confirm_without_guide_sends_nothing() -> Result<(), TestError> {
    let mut test = with_selection_created(board_endpoints(TestBuilder::new(), &[(1, "Ella Rock")], 2))
        .build()
        .await?;
    let submit = test.server.mock("POST", "/trips/add").expect(0).create();

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = wizard_at_information(&api).await;
    fill_details(&mut wizard);
    wizard.next().unwrap();
    assert_eq!(wizard.next(), Ok(WizardStep::ConfirmTrip));

    let result = wizard.confirm(&api).await;

    assert!(matches!(
        result,
        Err(Error::WizardError(WizardError::NoGuideSelected))
    ));
    assert_eq!(wizard.step(), WizardStep::ConfirmTrip);

    submit.assert();
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the selection to be emptied remotely once the trip is submitted
async fn clears_selection_after_submission() -> Result<(), TestError> {
    let mut test = confirm_builder().build().await?;
    let submit = test
        .server
        .mock("POST", "/trips/add")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::trip(55, 1, 7, "Pending").to_string())
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let mut wizard = wizard_at_information(&api).await;
    fill_details(&mut wizard);
    wizard.next().unwrap();
    wizard.load_guides(&api).await.unwrap();
    wizard.select_guide(7).unwrap();
    wizard.next().unwrap();
    wizard.confirm(&api).await.unwrap();

    // The selection created earlier is found and emptied
    let lookup = test
        .server
        .mock("GET", "/selected-destinations/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::selected_destinations(100, 1, &[1]).to_string())
        .expect(1)
        .create();
    let clear = test
        .server
        .mock("PATCH", "/selected-destinations/100/updated-selected-destinations")
        .match_body(Matcher::Json(json!([])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::selected_destinations(100, 1, &[]).to_string())
        .expect(1)
        .create();

    wizard.clear_selection(&api).await.unwrap();

    assert!(wizard.board().selected.is_empty());
    assert_eq!(wizard.step(), WizardStep::Success);

    submit.assert();
    lookup.assert();
    clear.assert();

    Ok(())
}
