use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DestinationDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Body of the create and update destination endpoints
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DestinationPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub details: Vec<String>,
    pub activities: Vec<String>,
    pub province: String,
    pub district: String,
    pub climate: String,
    pub image: String,
}

/// The id and name of a destination, as carried through the trip wizard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub id: i64,
    pub name: String,
}

impl From<&DestinationDto> for DestinationSummary {
    fn from(destination: &DestinationDto) -> Self {
        Self {
            id: destination.id,
            name: destination.name.clone(),
        }
    }
}
