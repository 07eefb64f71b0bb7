use serde::{Deserialize, Serialize};

/// A tour guide as listed in the guide directory
///
/// `review_count` is the number of reviews the guide has received and `rating` is the
/// average score out of five. The directory endpoint currently only reports the count,
/// so `rating` is absent until the API provides it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourGuideDto {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nic: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Registration of a new tour guide by an administrator
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourGuideRegistrationDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub nic: String,
    pub telephone: String,
    pub address: String,
    pub license_number: String,
    pub review_count: u32,
}

/// Profile fields of a tour guide an administrator may change
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourGuideProfileDto {
    pub name: String,
    pub email: String,
    pub nic: String,
    pub telephone: String,
    pub address: String,
    pub license_number: String,
}
