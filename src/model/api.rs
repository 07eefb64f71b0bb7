use serde::{Deserialize, Serialize};

/// The body returned by the API when a request fails
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message, sent as `detail` by the trip and destination services
    #[serde(alias = "detail")]
    pub error: String,
}
