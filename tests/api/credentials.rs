use mockito::Matcher;
use pearl_test_utils::prelude::*;

use crate::util::client;

#[tokio::test]
/// Expect the bearer credential on every request of a signed in user
async fn attaches_bearer_token_when_authenticated() -> Result<(), TestError> {
    let token = token::tourist();
    let authorization = format!("Bearer {}", token);

    let mut test = TestBuilder::new().build().await?;
    let destinations = test
        .server
        .mock("GET", "/destinations/")
        .match_header("authorization", authorization.as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create();
    let guides = test
        .server
        .mock("GET", "/users/tour-guides")
        .match_header("authorization", authorization.as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create();

    let api = client(&test, Some(&token));
    assert!(api.list_destinations().await.is_ok());
    assert!(api.list_tour_guides().await.is_ok());

    destinations.assert();
    guides.assert();

    Ok(())
}

#[tokio::test]
/// Expect no authorization header for anonymous users
async fn omits_authorization_when_anonymous() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("GET", "/destinations/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create();

    let api = client(&test, None);
    assert!(api.list_destinations().await.is_ok());

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect an undecodable token to be treated as anonymous and not sent
async fn omits_authorization_for_garbage_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("GET", "/trips/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create();

    let api = client(&test, Some("not-a-token"));
    assert!(api.token().is_none());
    assert!(api.list_trips().await.is_ok());

    mock.assert();

    Ok(())
}
