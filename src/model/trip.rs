use std::fmt;

use chrono::{Days, NaiveDate};
use dioxus_logger::tracing;
use serde::{Deserialize, Deserializer, Serialize};

/// Read an optional `YYYY-MM-DD` date, blank or malformed values become `None`
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::debug!(start_date = %value, "Ignoring unreadable trip date: {}", e);

                None
            }
        }))
}

/// Lifecycle status of a trip, unknown values from the API are preserved as-is
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TripStatus {
    Pending,
    Accepted,
    Started,
    Completed,
    Rejected,
    Other(String),
}

impl TripStatus {
    /// Whether the trip still blocks the tourist from planning another one
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Accepted | Self::Started)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Started => "Started",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for TripStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "accepted" => Self::Accepted,
            "started" => Self::Started,
            "completed" => Self::Completed,
            "rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<TripStatus> for String {
    fn from(value: TripStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Other(status) => status,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "paid" => Self::Paid,
            _ => Self::Other(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Payload submitted once the tourist confirms a trip
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequestDto {
    pub tourist_id: i64,
    pub tourist_passport_number: String,
    pub tourist_country: String,
    pub tour_guide_id: i64,
    pub destinations: Vec<String>,
    pub number_of_adults: u32,
    pub number_of_children: u32,
    pub start_date: NaiveDate,
    pub number_of_days: u32,
    pub trip_status: TripStatus,
    pub trip_payment: f64,
    pub payment_status: PaymentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub id: i64,
    pub tourist_id: i64,
    #[serde(default)]
    pub tourist_name: Option<String>,
    #[serde(default)]
    pub tourist_passport_number: String,
    #[serde(default)]
    pub tourist_country: String,
    pub tour_guide_id: i64,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub number_of_adults: u32,
    #[serde(default)]
    pub number_of_children: u32,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub number_of_days: u32,
    pub trip_status: TripStatus,
    #[serde(default)]
    pub trip_payment: f64,
    pub payment_status: PaymentStatus,
}

impl TripDto {
    /// Card heading naming the first destination of the trip
    pub fn headline(&self) -> String {
        match self.destinations.as_slice() {
            [] => "Trip".to_string(),
            [only] => format!("Trip to {}", only),
            [first, ..] => format!("Trip to {} & more", first),
        }
    }

    /// Last day of the trip, `None` when the start date or length is unknown
    pub fn end_date(&self) -> Option<NaiveDate> {
        if self.number_of_days == 0 {
            return None;
        }

        self.start_date?
            .checked_add_days(Days::new(self.number_of_days as u64))
    }

    /// Message shown to the tourist under the trip details
    pub fn status_message(&self) -> &'static str {
        match self.trip_status {
            TripStatus::Pending => "Your trip request is pending approval from a tour guide.",
            _ => "Your trip is active now, please stay connected with your tour guide.",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStatusUpdateDto {
    pub trip_status: TripStatus,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusUpdateDto {
    pub payment_status: PaymentStatus,
}

/// Body of the has-active-trip endpoints, older deployments answer with a bare bool
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ActiveTripDto {
    Flag(bool),
    Object { has_active_trip: bool },
}

impl ActiveTripDto {
    pub fn has_active_trip(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Object { has_active_trip } => *has_active_trip,
        }
    }
}
