use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, PlatformClient, PlatformTransport},
    config::Config,
    session::{cookie, Identity},
};

/// Resolve the identity stored in the cookie jar.
///
/// A token that cannot be decoded is removed so the next page load starts clean.
pub fn restore_identity() -> Identity {
    let token = cookie::read_access_token();
    let identity = Identity::from_token(token.as_deref());

    if token.is_some() && !identity.is_authenticated() {
        tracing::info!("Clearing undecodable access token");
        cookie::clear_access_token();
    }

    identity
}

/// Persist a freshly issued token and make it the current identity
pub fn sign_in(mut identity: Signal<Identity>, token: &str) -> Identity {
    let resolved = Identity::from_token(Some(token));

    if resolved.is_authenticated() {
        cookie::store_access_token(token);
    }
    identity.set(resolved.clone());

    resolved
}

pub fn sign_out(mut identity: Signal<Identity>) {
    cookie::clear_access_token();
    identity.set(Identity::Anonymous);
}

pub fn api_client(config: &Config, identity: &Identity) -> PlatformClient {
    ApiClient::from_config(config, PlatformTransport::default()).with_identity(identity)
}

pub fn use_identity() -> Signal<Identity> {
    use_context::<Signal<Identity>>()
}

/// API client carrying the current user's credential
pub fn use_api() -> PlatformClient {
    let config = use_context::<Config>();
    let identity = use_identity();

    let client = api_client(&config, &identity.read());
    client
}
