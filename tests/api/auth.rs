use mockito::Matcher;
use pearl::model::user::LoginForm;
use pearl_test_utils::prelude::*;
use serde_json::json;

use crate::util::client;

#[tokio::test]
/// Expect credentials to be posted as a form and the issued token returned
async fn logs_in_with_form_credentials() -> Result<(), TestError> {
    let issued = token::tourist();

    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("POST", "/auth/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "a@b.com".into()),
            Matcher::UrlEncoded("password".into(), "secret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "access_token": issued, "token_type": "bearer" }).to_string())
        .expect(1)
        .create();

    let api = client(&test, None);
    let result = api
        .login(&LoginForm {
            username: "a@b.com".to_string(),
            password: "secret".to_string(),
        })
        .await;

    let token = result.unwrap();
    assert_eq!(token.access_token, issued);
    assert_eq!(token.token_type, "bearer");

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect rejected credentials to surface the API's message
async fn fails_with_rejected_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("POST", "/auth/token")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Incorrect username or password"}"#)
        .expect(1)
        .create();

    let api = client(&test, None);
    let result = api
        .login(&LoginForm {
            username: "a@b.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    let error = result.unwrap_err();
    assert_eq!(error.status(), Some(401));
    assert!(error.to_string().contains("Incorrect username or password"));

    mock.assert();

    Ok(())
}
