use pearl::error::api::ApiError;
use pearl_test_utils::prelude::*;

use crate::util::client;

#[tokio::test]
/// Expect non-2xx bodies without a message field to be kept as raw text
async fn keeps_raw_error_text() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("GET", "/trips/")
        .with_status(502)
        .with_body("upstream unavailable")
        .expect(1)
        .create();

    let api = client(&test, Some(&token::admin()));
    let result = api.list_trips().await;

    match result {
        Err(ApiError::Status { status, message, .. }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected status error, got {:?}", other),
    }

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect a malformed payload to be reported as a decode error
async fn reports_malformed_payload() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("GET", "/users/tour-guides")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"guides": "nope"}"#)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let result = api.list_tour_guides().await;

    assert!(matches!(result, Err(ApiError::Decode { .. })));

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect an unreachable API to be reported as a transport error
async fn reports_unreachable_api() {
    let api = pearl::api::ApiClient::new(
        "http://127.0.0.1:9",
        pearl::api::transport::native::ReqwestTransport::new(),
    );

    let result = api.list_destinations().await;

    assert!(matches!(result, Err(ApiError::Transport { .. })));
}
