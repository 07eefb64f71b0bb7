use serde::{Deserialize, Serialize};

/// Picture given to new accounts until the tourist uploads their own
pub const DEFAULT_PROFILE_PICTURE: &str = "/images/profile-placeholder.jpg";

/// Sign up of a new tourist account
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristRegistrationDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub passport_number: String,
    pub country: String,
    pub address: String,
    pub birth_day: String,
    pub profile_picture: String,
}

/// Tourist specific part of a profile
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristDetailsDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default, alias = "passport_number")]
    pub passport_number: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub birth_day: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristProfileDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub tourist: TouristDetailsDto,
}

/// Body of the tourist profile update endpoint
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristProfileUpdateDto {
    pub name: String,
    pub email: String,
    pub passport_number: String,
    pub country: String,
    pub address: String,
    pub birth_day: String,
}
