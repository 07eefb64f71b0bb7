//! HTTP transports the [`ApiClient`](crate::api::ApiClient) sends requests through.
//!
//! Browser builds use the Fetch API via `reqwasm`, native builds (tests, desktop) use
//! `reqwest`. Both only move bytes; status handling and JSON decoding live in the client.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use std::fmt;

use async_trait::async_trait;

use crate::error::api::ApiError;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub type PlatformTransport = self::browser::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = self::native::ReqwestTransport;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
compile_error!("wasm32 builds need the `web` feature for an HTTP transport");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        f.write_str(method)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a fully built request and returns the raw response.
///
/// Only failures to complete the exchange are errors here; any status code is a
/// successful response at this layer.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
