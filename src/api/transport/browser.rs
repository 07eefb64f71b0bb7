use async_trait::async_trait;
use reqwasm::http::Request;

use crate::{
    api::transport::{HttpRequest, HttpResponse, HttpTransport, Method},
    error::api::ApiError,
};

/// Transport backed by the browser Fetch API
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwasmTransport;

#[async_trait(?Send)]
impl HttpTransport for ReqwasmTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let transport_error = |reason: String| ApiError::Transport {
            endpoint: request.url.clone(),
            reason,
        };

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        if let Some(body) = request.body.clone() {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| transport_error(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| transport_error(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
