use serde::{Deserialize, Serialize};

/// A tourist's dream list of destination ids
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDto {
    pub id: i64,
    pub tourist_id: i64,
    #[serde(default)]
    pub destinations: Vec<i64>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWishlistDto {
    pub tourist_id: i64,
    pub destinations: Vec<i64>,
}

/// The destination ids a tourist has picked for the trip being planned
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedDestinationsDto {
    pub id: i64,
    pub tourist_id: i64,
    #[serde(default)]
    pub selected_destinations: Vec<i64>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSelectedDestinationsDto {
    pub tourist_id: i64,
    pub selected_destinations: Vec<i64>,
}
