use std::fmt;

use serde::{Deserialize, Serialize};

/// Role carried in the access token claims
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Tourist,
    TourGuide,
}

impl Role {
    /// Path prefix of the pages that belong to this role
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Tourist => "/tourist",
            Self::TourGuide => "/tour-guide",
        }
    }

    /// Page a signed in user of this role lands on
    pub fn home_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Tourist => "/tourist/home",
            Self::TourGuide => "/tour-guide/account",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Admin => "admin",
            Self::Tourist => "tourist",
            Self::TourGuide => "tour_guide",
        };
        f.write_str(name)
    }
}

/// Response of the token endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}

/// Credentials submitted to the token endpoint as an OAuth2 password form
#[derive(Clone, Debug, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
