use std::time::Duration;

use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{
    api::transport::{HttpRequest, HttpResponse, HttpTransport, Method},
    error::api::ApiError,
};

/// Default timeout for API requests
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport backed by `reqwest`, used outside the browser
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let transport_error = |reason: String| ApiError::Transport {
            endpoint: request.url.clone(),
            reason,
        };

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        if let Some(body) = request.body.clone() {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| transport_error(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| transport_error(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
