use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

use crate::{error::identity::IdentityError, model::user::Role};

/// Claims the authentication service puts into access tokens
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// Signature checks are the API's job; the front-end only needs the claims to decide
/// what to show. Both base64url and standard base64 alphabets are accepted, with or
/// without padding.
pub fn decode_claims(token: &str) -> Result<Claims, IdentityError> {
    let mut segments = token.trim().split('.');

    let payload = match (segments.next(), segments.next()) {
        (Some(header), Some(payload)) if !header.is_empty() && !payload.is_empty() => payload,
        _ => {
            return Err(IdentityError::MalformedToken(
                "expected header and payload segments".to_string(),
            ))
        }
    };

    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| IdentityError::MalformedToken(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| IdentityError::InvalidClaims(e.to_string()))
}
