use serde::{Deserialize, Serialize};

/// Value used for `time_start` when the catalog entry has none
pub const TIME_START_MISSING: &str = "N/A";

/// A representative map position for one dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A catalog collection prepared for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetResult {
    pub id: Option<String>,

    pub title: Option<String>,

    pub summary: Option<String>,

    pub data_center: Option<String>,

    /// `YYYY-MM-DD` when the catalog timestamp parsed, the raw value otherwise
    pub time_start: String,

    #[serde(flatten)]
    pub coordinate: Coordinate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Structured summary produced by the assistant for a result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub overview: String,

    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub reason: String,
}
