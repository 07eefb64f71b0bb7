use pearl::{
    api::{transport::native::ReqwestTransport, ApiClient},
    session::Identity,
};
use pearl_test_utils::TestSetup;

/// Client pointed at the mock server, signed in with `token` when provided
pub fn client(test: &TestSetup, token: Option<&str>) -> ApiClient<ReqwestTransport> {
    ApiClient::new(test.url(), ReqwestTransport::new()).with_identity(&Identity::from_token(token))
}
