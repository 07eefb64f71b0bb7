use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::transport::{HttpRequest, HttpResponse, HttpTransport, Method},
    config::Config,
    error::api::ApiError,
    model::api::ErrorDto,
    session::Identity,
};

/// The single client every outbound API request goes through.
///
/// Whenever the client holds an access token it is attached as a bearer credential to
/// every request, so individual call sites cannot forget it.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    token: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Creates a new instance of [`ApiClient`] without credentials
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            token: None,
        }
    }

    /// Creates a client for the configured API base URL
    pub fn from_config(config: &Config, transport: T) -> Self {
        Self::new(config.api_base_url.clone(), transport)
    }

    /// Attach the credential of the provided identity to all further requests
    pub fn with_identity(mut self, identity: &Identity) -> Self {
        self.set_identity(identity);
        self
    }

    pub fn set_identity(&mut self, identity: &Identity) {
        self.token = identity.token().map(str::to_string);
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build and send a request, returning the response whatever its status
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<(&'static str, String)>,
    ) -> Result<HttpResponse, ApiError> {
        let url = self.url(path);

        let mut headers = vec![("Accept", "application/json".to_string())];
        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        let body = body.map(|(content_type, body)| {
            headers.push(("Content-Type", content_type.to_string()));
            body
        });

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = response.status,
            "Received API response"
        );

        Ok(response)
    }

    fn encode_json<B: Serialize>(path: &str, body: &B) -> Result<(&'static str, String), ApiError> {
        serde_json::to_string(body)
            .map(|body| ("application/json", body))
            .map_err(|e| ApiError::Encode {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })
    }

    fn decode<R: DeserializeOwned>(path: &str, response: &HttpResponse) -> Result<R, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Converts a non-2xx response into an [`ApiError::Status`] carrying the API's message
    fn status_error(path: &str, response: &HttpResponse) -> ApiError {
        let message = match serde_json::from_str::<ErrorDto>(&response.body) {
            Ok(error_dto) => error_dto.error,
            Err(_) if response.body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => response.body.clone(),
        };

        ApiError::Status {
            endpoint: path.to_string(),
            status: response.status,
            message,
        }
    }

    fn expect_json<R: DeserializeOwned>(path: &str, response: HttpResponse) -> Result<R, ApiError> {
        if response.is_success() {
            Self::decode(path, &response)
        } else {
            Err(Self::status_error(path, &response))
        }
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.send(Method::Get, path, None).await?;

        Self::expect_json(path, response)
    }

    /// GET a resource that may not exist.
    ///
    /// # Returns
    /// - `Ok(None)` - The API answered 404 or with a `null` body
    /// - `Ok(Some(R))` - The resource exists
    pub(crate) async fn get_optional<R: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<R>, ApiError> {
        let response = self.send(Method::Get, path, None).await?;

        match response.status {
            404 => Ok(None),
            _ if response.is_success() => {
                let body = response.body.trim();
                if body.is_empty() || body == "null" {
                    return Ok(None);
                }

                Self::decode(path, &response).map(Some)
            }
            _ => Err(Self::status_error(path, &response)),
        }
    }

    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = Self::encode_json(path, body)?;
        let response = self.send(Method::Post, path, Some(body)).await?;

        Self::expect_json(path, response)
    }

    /// POST a body encoded as `application/x-www-form-urlencoded`
    pub(crate) async fn post_form<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_urlencoded::to_string(body).map_err(|e| ApiError::Encode {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })?;
        let response = self
            .send(
                Method::Post,
                path,
                Some(("application/x-www-form-urlencoded", body)),
            )
            .await?;

        Self::expect_json(path, response)
    }

    pub(crate) async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = Self::encode_json(path, body)?;
        let response = self.send(Method::Patch, path, Some(body)).await?;

        Self::expect_json(path, response)
    }

    /// Send a JSON body to an endpoint whose response body is not used
    pub(crate) async fn submit<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = Self::encode_json(path, body)?;
        let response = self.send(method, path, Some(body)).await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(path, &response))
        }
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::Delete, path, None).await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(path, &response))
        }
    }
}
