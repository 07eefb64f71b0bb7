//! Access tokens in the shape the authentication service issues.
//!
//! Only the payload matters to the front-end, so the signature segment is a placeholder.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::json;

use crate::constant::{TEST_ADMIN_ID, TEST_GUIDE_ID, TEST_TOKEN_EXP, TEST_TOURIST_ID};

/// Mint a token for the provided claims
pub fn mint(role: &str, user_id: i64, user_name: &str, exp: i64) -> String {
    let header = json!({ "alg": "HS256", "typ": "JWT" });
    let claims = json!({
        "sub": format!("{}@pearl.lk", user_name.to_lowercase().replace(' ', ".")),
        "role": role,
        "userId": user_id,
        "userName": user_name,
        "exp": exp,
    });

    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

pub fn tourist() -> String {
    mint("tourist", TEST_TOURIST_ID, "Peter Maxwell", TEST_TOKEN_EXP)
}

pub fn tour_guide() -> String {
    mint("tour_guide", TEST_GUIDE_ID, "Nimal Perera", TEST_TOKEN_EXP)
}

pub fn admin() -> String {
    mint("admin", TEST_ADMIN_ID, "Admin", TEST_TOKEN_EXP)
}

/// Token whose expiry has already passed
pub fn expired_tourist() -> String {
    mint("tourist", TEST_TOURIST_ID, "Peter Maxwell", 1_000_000_000)
}
